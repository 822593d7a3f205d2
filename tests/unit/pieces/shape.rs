//! Tests for shape bitmaps, clockwise rotation, and rotation dedup

#[cfg(test)]
mod tests {
    use daysquare::pieces::shape::{Shape, generate_rotations};

    // Tests bitmap construction preserves dimensions and filled cells
    // Verified by transposing the row and column indices in from_rows
    #[test]
    fn test_from_rows_dimensions() {
        let shape = Shape::from_rows(&[[1, 0, 1], [0, 1, 0]]);

        assert_eq!(shape.rows(), 2);
        assert_eq!(shape.cols(), 3);
        assert!(shape.is_filled(0, 0));
        assert!(!shape.is_filled(0, 1));
        assert!(shape.is_filled(0, 2));
        assert!(shape.is_filled(1, 1));
        assert!(!shape.is_filled(1, 0));
    }

    // Tests out-of-range reads come back empty instead of panicking
    // Verified by removing the bounds fallback in is_filled
    #[test]
    fn test_is_filled_out_of_range() {
        let shape = Shape::from_rows(&[[1, 1]]);

        assert!(!shape.is_filled(1, 0));
        assert!(!shape.is_filled(0, 2));
        assert!(!shape.is_filled(100, 100));
    }

    // Tests 90-degree clockwise rotation produces the transposed-and-flipped bitmap
    // Verified by using j,i instead of rows-1-j,i in the rotation formula
    #[test]
    fn test_rotate_clockwise_mapping() {
        let ell = Shape::from_rows(&[[1, 0], [1, 0], [1, 1]]);
        let rotated = ell.rotate_clockwise();

        assert_eq!(rotated, Shape::from_rows(&[[1, 1, 1], [1, 0, 0]]));
    }

    // Tests a single row becomes a single column under rotation
    // Verified by swapping the output dimensions
    #[test]
    fn test_rotate_row_to_column() {
        let dash = Shape::from_rows(&[[1, 1]]);
        let rotated = dash.rotate_clockwise();

        assert_eq!(rotated.rows(), 2);
        assert_eq!(rotated.cols(), 1);
        assert!(rotated.is_filled(0, 0));
        assert!(rotated.is_filled(1, 0));
    }

    // Tests four quarter turns return to the original bitmap
    // Verified by dropping the flip from the rotation formula
    #[test]
    fn test_four_rotations_identity() {
        let ell = Shape::from_rows(&[[1, 0], [1, 0], [1, 1]]);
        let full_turn = ell
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise();

        assert_eq!(full_turn, ell, "Four quarter turns should be the identity");
    }

    // Tests the anchor is the first filled cell in row-major order
    // Verified by scanning column-major instead
    #[test]
    fn test_anchor_first_filled_cell() {
        assert_eq!(Shape::from_rows(&[[1]]).anchor(), (0, 0));
        assert_eq!(Shape::from_rows(&[[0, 1], [1, 1]]).anchor(), (0, 1));
        assert_eq!(Shape::from_rows(&[[0, 0], [0, 1]]).anchor(), (1, 1));
    }

    // Tests the anchor of an all-empty bitmap falls back to the corner
    // Verified by panicking on empty bitmaps instead
    #[test]
    fn test_anchor_empty_bitmap() {
        let empty = Shape::from_rows(&[[0, 0], [0, 0]]);
        assert_eq!(empty.anchor(), (0, 0));
    }

    // Tests filled cells iterate in row-major order
    // Verified by iterating columns before rows
    #[test]
    fn test_filled_cells_row_major() {
        let corner = Shape::from_rows(&[[0, 1], [1, 1]]);
        let cells: Vec<(usize, usize)> = corner.filled_cells().collect();

        assert_eq!(cells, vec![(0, 1), (1, 0), (1, 1)]);
    }

    // Tests cell counting ignores empty positions
    // Verified by counting the whole matrix instead of filled cells
    #[test]
    fn test_cell_count() {
        assert_eq!(Shape::from_rows(&[[1]]).cell_count(), 1);
        assert_eq!(Shape::from_rows(&[[1, 0], [0, 1]]).cell_count(), 2);
        assert_eq!(Shape::from_rows(&[[1, 1], [1, 1]]).cell_count(), 4);
    }

    // Tests rotation generation keeps the base form first
    // Verified by pushing the base after the rotations
    #[test]
    fn test_generate_rotations_base_first() {
        let ell = Shape::from_rows(&[[1, 0], [1, 0], [1, 1]]);
        let rotations = generate_rotations(&ell);

        assert_eq!(rotations.first(), Some(&ell));
        assert_eq!(rotations.len(), 4);
    }

    // Tests fully symmetric shapes collapse to a single form
    // Verified by skipping the duplicate check
    #[test]
    fn test_generate_rotations_square_dedup() {
        let square = Shape::from_rows(&[[1, 1], [1, 1]]);
        let rotations = generate_rotations(&square);

        assert_eq!(rotations.len(), 1);
    }

    // Tests 180-degree symmetric shapes keep exactly two forms
    // Verified by comparing dimensions instead of cell patterns
    #[test]
    fn test_generate_rotations_half_symmetric() {
        let dash = Shape::from_rows(&[[1, 1]]);
        let rotations = generate_rotations(&dash);

        assert_eq!(rotations.len(), 2);
        assert_eq!(rotations.get(1), Some(&Shape::from_rows(&[[1], [1]])));
    }

    // Tests every generated rotation preserves the filled cell count
    // Verified by dropping cells during rotation
    #[test]
    fn test_rotations_preserve_cell_count() {
        let tee = Shape::from_rows(&[[1, 1, 1], [0, 1, 0]]);
        for rotation in generate_rotations(&tee) {
            assert_eq!(rotation.cell_count(), 4);
        }
    }

    use daysquare::pieces::catalog::piece_catalog;

    // Tests four quarter turns are the identity for every catalog bitmap
    // Verified by flipping the row order on the final turn
    #[test]
    fn test_catalog_four_rotation_identity() {
        for piece in piece_catalog() {
            let full_turn = piece
                .shape
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise();
            assert_eq!(
                full_turn,
                piece.shape,
                "Four turns changed the {} bitmap",
                piece.kind.name()
            );
        }
    }

    // Tests every rotation form anchors on its first filled cell
    // Verified by anchoring on the bitmap corner unconditionally
    #[test]
    fn test_catalog_anchor_first_filled() {
        for piece in piece_catalog() {
            for shape in &piece.rotations {
                assert_eq!(
                    shape.filled_cells().next(),
                    Some(shape.anchor()),
                    "Anchor off the first filled cell for {}",
                    piece.kind.name()
                );
            }
        }
    }
}
