//! Tests for applying grid specs to a grid host

use gridspec::prelude::*;

/// A host that counts how often its tracks are replaced
#[derive(Default)]
struct CountingHost {
    rows: Vec<TrackDefinition>,
    columns: Vec<TrackDefinition>,
    replacements: usize,
}

impl GridHost for CountingHost {
    fn tracks(&self, axis: GridAxis) -> &[TrackDefinition] {
        match axis {
            GridAxis::Rows => &self.rows,
            GridAxis::Columns => &self.columns,
        }
    }

    fn replace_tracks(&mut self, axis: GridAxis, tracks: Vec<TrackDefinition>) {
        self.replacements += 1;
        match axis {
            GridAxis::Rows => self.rows = tracks,
            GridAxis::Columns => self.columns = tracks,
        }
    }
}

#[test]
fn test_mapping_is_one_to_one() {
    let mut host = CountingHost::default();
    let applied = apply_definitions(
        &mut host,
        GridAxis::Columns,
        Some("Auto(max=500),2*(min=300),100(SharedSizeGroup=g)"),
    );
    assert!(applied);
    assert_eq!(host.replacements, 1);

    let columns = host.tracks(GridAxis::Columns);
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0].size, GridLength::auto());
    assert_eq!(columns[0].max, Some(500.0));
    assert_eq!(columns[1].size, GridLength::star(2.0));
    assert_eq!(columns[1].min, Some(300.0));
    assert_eq!(columns[2].size.unit, GridUnit::Pixel);
    assert_eq!(columns[2].size.value, 100.0);
    assert_eq!(columns[2].shared_size_group.as_deref(), Some("g"));
    assert!(host.tracks(GridAxis::Rows).is_empty());
}

#[test]
fn test_empty_result_is_a_no_op() {
    let mut host = CountingHost::default();
    apply_definitions(&mut host, GridAxis::Rows, Some("*,*"));

    for spec in [None, Some(""), Some("nope"), Some(",,,")] {
        assert!(!apply_definitions(&mut host, GridAxis::Rows, spec));
    }
    assert_eq!(host.replacements, 1);
    assert_eq!(host.tracks(GridAxis::Rows).len(), 2);
}

#[test]
fn test_apply_through_trait_object() {
    let mut grid = Grid::new();
    let host: &mut dyn GridHost = &mut grid;
    assert!(apply_definitions(host, GridAxis::Rows, Some("Auto")));
    assert_eq!(grid.rows().len(), 1);
}

#[test]
fn test_grid_property_changes() {
    let mut grid = Grid::new();
    assert!(grid.set_rows("Auto,*,200"));
    assert!(grid.set_columns("*,*"));
    assert_eq!(grid.rows().len(), 3);
    assert_eq!(grid.columns().len(), 2);

    assert!(!grid.set_rows(""));
    assert_eq!(grid.rows().len(), 3);
    assert_eq!(grid.rows_spec(), Some(""));

    assert!(grid.set_rows("Auto,*,200"));
    assert_eq!(grid.rows()[2].size, GridLength::pixel(200.0));
}

#[test]
fn test_axis_parse_error() {
    let err = "sideways".parse::<GridAxis>().unwrap_err();
    assert!(matches!(err, GridSpecError::UnknownAxis { .. }));
}
