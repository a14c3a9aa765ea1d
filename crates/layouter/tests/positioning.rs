#[cfg(test)]
mod tests {
    use layouter::{
        Align, Direction, Display, Edge, Edges, FlexDirection, LayoutTree, NodeId, PositionType,
        StructuralError, Style, Value,
    };

    fn assert_frame(
        tree: &LayoutTree,
        node: NodeId,
        expected: [f32; 4],
    ) -> Result<(), StructuralError> {
        let frame = tree.layout(node)?.frame();
        let actual = [frame.x, frame.y, frame.width, frame.height];
        for (got, want) in actual.iter().zip(expected) {
            assert!(
                (got - want).abs() < 0.01,
                "{node:?}: got {actual:?}, expected {expected:?}"
            );
        }
        Ok(())
    }

    fn row(width: f32, height: f32) -> Style {
        Style {
            flex_direction: FlexDirection::Row,
            width: Value::points(width),
            height: Value::points(height),
            ..Style::default()
        }
    }

    fn sized(width: f32, height: f32) -> Style {
        Style {
            width: Value::points(width),
            height: Value::points(height),
            ..Style::default()
        }
    }

    fn offsets(edges: &[(Edge, f32)]) -> Edges {
        edges
            .iter()
            .fold(Edges::new(), |acc, &(edge, value)| acc.with(edge, Value::points(value)))
    }

    /// One container with a single child, laid out left to right.
    fn single_child(container: Style, child: Style) -> Result<(LayoutTree, NodeId), StructuralError> {
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(container);
        let node = tree.new_node_with_style(child);
        tree.append_child(root, node)?;
        tree.compute_layout(root, None, None, Direction::Ltr)?;
        Ok((tree, node))
    }

    #[test]
    /// # Panics
    /// Panics if leading offsets do not place an absolute child.
    fn absolute_from_leading_offsets() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let child = Style {
            position_type: PositionType::Absolute,
            position: offsets(&[(Edge::Left, 10.0), (Edge::Top, 20.0)]),
            ..sized(30.0, 40.0)
        };
        let (tree, node) = single_child(row(100.0, 100.0), child)?;
        assert_frame(&tree, node, [10.0, 20.0, 30.0, 40.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if trailing offsets do not place an absolute child from the far edges.
    fn absolute_from_trailing_offsets() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let child = Style {
            position_type: PositionType::Absolute,
            position: offsets(&[(Edge::Right, 10.0), (Edge::Bottom, 20.0)]),
            ..sized(30.0, 40.0)
        };
        let (tree, node) = single_child(row(100.0, 100.0), child)?;
        assert_frame(&tree, node, [60.0, 40.0, 30.0, 40.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if an absolute child without a width is not sized by its two offsets.
    fn absolute_sized_by_offsets() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let child = Style {
            position_type: PositionType::Absolute,
            position: offsets(&[(Edge::Left, 10.0), (Edge::Right, 10.0), (Edge::Top, 0.0)]),
            height: Value::points(10.0),
            ..Style::default()
        };
        let (tree, node) = single_child(row(100.0, 100.0), child)?;
        assert_frame(&tree, node, [10.0, 0.0, 80.0, 10.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if an absolute child takes space from its in-flow siblings.
    fn absolute_child_is_out_of_flow() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(row(100.0, 100.0));
        let floating = tree.new_node_with_style(Style {
            position_type: PositionType::Absolute,
            ..sized(50.0, 50.0)
        });
        let grower = tree.new_node_with_style(Style {
            flex_grow: Some(1.0),
            ..Style::default()
        });
        tree.append_child(root, floating)?;
        tree.append_child(root, grower)?;
        tree.compute_layout(root, None, None, Direction::Ltr)?;

        assert_frame(&tree, floating, [0.0, 0.0, 50.0, 50.0])?;
        assert_frame(&tree, grower, [0.0, 0.0, 100.0, 100.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if relative offsets do not shift a child from its flow position.
    fn relative_offsets_shift() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let child = Style {
            position: offsets(&[(Edge::Left, 5.0), (Edge::Top, 7.0)]),
            ..sized(20.0, 20.0)
        };
        let (tree, node) = single_child(row(100.0, 100.0), child)?;
        assert_frame(&tree, node, [5.0, 7.0, 20.0, 20.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a right-to-left row does not start at the right edge.
    fn rtl_row_starts_at_right() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(row(100.0, 20.0));
        let first = tree.new_node_with_style(sized(20.0, 20.0));
        let second = tree.new_node_with_style(sized(30.0, 20.0));
        tree.append_child(root, first)?;
        tree.append_child(root, second)?;
        tree.compute_layout(root, None, None, Direction::Rtl)?;

        assert_frame(&tree, root, [0.0, 0.0, 100.0, 20.0])?;
        assert_frame(&tree, first, [80.0, 0.0, 20.0, 20.0])?;
        assert_frame(&tree, second, [50.0, 0.0, 30.0, 20.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if row-reverse does not lay children out from the right edge.
    fn row_reverse_starts_at_right() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let container = Style {
            flex_direction: FlexDirection::RowReverse,
            ..row(100.0, 20.0)
        };
        let (tree, node) = single_child(container, sized(20.0, 20.0))?;
        assert_frame(&tree, node, [80.0, 0.0, 20.0, 20.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a display:none child keeps a size or takes space.
    fn display_none_collapses() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(row(100.0, 100.0));
        let hidden = tree.new_node_with_style(Style {
            display: Display::None,
            ..sized(50.0, 50.0)
        });
        let nested = tree.new_node_with_style(sized(10.0, 10.0));
        let visible = tree.new_node_with_style(Style {
            flex_grow: Some(1.0),
            ..Style::default()
        });
        tree.append_child(hidden, nested)?;
        tree.append_child(root, hidden)?;
        tree.append_child(root, visible)?;
        tree.compute_layout(root, None, None, Direction::Ltr)?;

        assert_frame(&tree, hidden, [0.0, 0.0, 0.0, 0.0])?;
        assert_frame(&tree, nested, [0.0, 0.0, 0.0, 0.0])?;
        assert_frame(&tree, visible, [0.0, 0.0, 100.0, 100.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if baseline alignment does not line up the children's bottoms.
    fn baseline_alignment() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(Style {
            align_items: Align::Baseline,
            ..row(100.0, 100.0)
        });
        let short = tree.new_node_with_style(sized(20.0, 20.0));
        let tall = tree.new_node_with_style(sized(20.0, 40.0));
        tree.append_child(root, short)?;
        tree.append_child(root, tall)?;
        tree.compute_layout(root, None, None, Direction::Ltr)?;

        assert_frame(&tree, short, [0.0, 20.0, 20.0, 20.0])?;
        assert_frame(&tree, tall, [20.0, 0.0, 20.0, 40.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a baseline callback is not used to align its node.
    fn baseline_callback_overrides() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(Style {
            align_items: Align::Baseline,
            ..row(100.0, 100.0)
        });
        let labelled = tree.new_node_with_style(sized(20.0, 20.0));
        let tall = tree.new_node_with_style(sized(20.0, 40.0));
        tree.set_baseline_func(labelled, |_, _, _| 5.0)?;
        tree.append_child(root, labelled)?;
        tree.append_child(root, tall)?;
        tree.compute_layout(root, None, None, Direction::Ltr)?;

        assert_frame(&tree, labelled, [0.0, 35.0, 20.0, 20.0])?;
        assert_frame(&tree, tall, [20.0, 0.0, 20.0, 40.0])?;
        Ok(())
    }
}
