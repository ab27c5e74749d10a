//! Tests for visit-order stores

#[cfg(test)]
mod tests {
    use saw_lattice::Lattice;
    use saw_lattice::lattice::position::{Position, VertexId};
    use saw_lattice::walk::occupancy::{
        Occupancy, OccupancyGrid, OccupancyState, VertexOccupancy,
    };

    // Tests marking records the order and flips the free flag
    // Verified by storing the order without checking for zero
    #[test]
    fn test_grid_mark_and_query() {
        let mut grid = OccupancyGrid::new(3, 4);
        assert!(grid.is_free([2, 3]));

        grid.mark_visited([2, 3], 5);
        assert!(!grid.is_free([2, 3]));
        assert_eq!(grid.visit_order([2, 3]), Some(5));
        assert_eq!(grid.visit_order([0, 0]), None);
        assert_eq!(grid.visited_count(), 1);
        assert_eq!(grid.orders()[[2, 3]], 5);
    }

    // Tests order zero and out-of-range keys are ignored
    // Verified by allowing order 0 to be pushed onto the visited list
    #[test]
    fn test_grid_ignores_invalid_marks() {
        let mut grid = OccupancyGrid::new(2, 2);
        grid.mark_visited([0, 0], 0);
        grid.mark_visited([5, 5], 3);

        assert!(grid.is_free([0, 0]));
        assert!(!grid.is_free([5, 5]));
        assert_eq!(grid.visited_count(), 0);
    }

    // Tests clear resets exactly the visited cells
    // Verified by leaving the visited list populated after clear
    #[test]
    fn test_grid_clear() {
        let mut grid = OccupancyGrid::new(4, 4);
        for (order, cell) in [[0, 0], [0, 1], [1, 1]].into_iter().enumerate() {
            grid.mark_visited(cell, u32::try_from(order + 1).expect("small"));
        }
        grid.clear();

        assert_eq!(grid.visited_count(), 0);
        assert!(grid.visited().is_empty());
        assert!(grid.orders().iter().all(|&order| order == 0));
    }

    // Tests remarking a cell does not duplicate it in the visited list
    // Verified by pushing on every mark
    #[test]
    fn test_grid_remark() {
        let mut grid = OccupancyGrid::new(2, 2);
        grid.mark_visited([1, 0], 1);
        grid.mark_visited([1, 0], 2);

        assert_eq!(grid.visited_count(), 1);
        assert_eq!(grid.visit_order([1, 0]), Some(2));
    }

    // Tests the vertex store mirrors the grid store
    // Verified by indexing vertex orders off by one
    #[test]
    fn test_vertex_store() {
        let mut store = VertexOccupancy::new(6);
        store.mark_visited(VertexId(4), 1);
        store.mark_visited(VertexId(9), 2);

        assert!(!store.is_free(VertexId(4)));
        assert!(store.is_free(VertexId(3)));
        assert!(!store.is_free(VertexId(9)));
        assert_eq!(store.visit_order(VertexId(4)), Some(1));
        assert_eq!(store.visited(), &[VertexId(4)]);

        store.clear();
        assert!(store.is_free(VertexId(4)));
        assert_eq!(store.visited_count(), 0);
    }

    // Tests the unified store picks the right backing and rejects foreign keys
    // Verified by treating foreign positions as free
    #[test]
    fn test_state_for_lattice() {
        let square = Lattice::square(3).expect("valid");
        let mut grid_state = OccupancyState::for_lattice(&square);
        assert!(grid_state.as_grid().is_some());
        assert!(!grid_state.is_free(Position::vertex(0)));

        grid_state.mark_visited(Position::vertex(0), 1);
        assert_eq!(grid_state.visited_count(), 0);

        let hex = Lattice::hex_vertex(1, 1, 1.0).expect("valid");
        let vertex_state = OccupancyState::for_lattice(&hex);
        assert!(vertex_state.as_grid().is_none());
        assert!(vertex_state.is_free(Position::vertex(5)));
        assert!(!vertex_state.is_free(Position::cell(0, 0)));
    }

    // Tests max_order reports the highest order among visited keys
    // Verified by returning the visited count instead
    #[test]
    fn test_max_order() {
        let hex = Lattice::hex_vertex(1, 1, 1.0).expect("valid");
        let mut state = OccupancyState::for_lattice(&hex);
        assert_eq!(state.max_order(), 0);

        state.mark_visited(Position::vertex(2), 7);
        state.mark_visited(Position::vertex(3), 3);
        assert_eq!(state.max_order(), 7);
    }
}
