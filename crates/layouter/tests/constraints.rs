#[cfg(test)]
mod tests {
    use layouter::{
        Align, Direction, FlexDirection, LayoutTree, MeasureMode, MeasureRequest, NodeId, Size,
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

    /// Every value of the node's frame is a number and its size is not negative.
    fn assert_sane(tree: &LayoutTree, node: NodeId) -> Result<(), StructuralError> {
        let frame = tree.layout(node)?.frame();
        for value in [frame.x, frame.y, frame.width, frame.height] {
            assert!(value.is_finite(), "{node:?}: {frame:?}");
        }
        assert!(frame.width >= 0.0 && frame.height >= 0.0, "{node:?}: {frame:?}");
        Ok(())
    }

    fn sized(width: f32, height: f32) -> Style {
        Style {
            width: Value::points(width),
            height: Value::points(height),
            ..Style::default()
        }
    }

    /// Unsized row holding a 30x10 and a 40x10 child.
    fn open_row() -> Result<(LayoutTree, NodeId, Vec<NodeId>), StructuralError> {
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(Style {
            flex_direction: FlexDirection::Row,
            ..Style::default()
        });
        let mut children = Vec::new();
        for width in [30.0, 40.0] {
            let child = tree.new_node_with_style(sized(width, 10.0));
            tree.append_child(root, child)?;
            children.push(child);
        }
        Ok((tree, root, children))
    }

    /// Row of `count` children that may grow, each with `basis`.
    fn growing_row(
        count: usize,
        basis: Value,
        flex_grow: f32,
    ) -> Result<(LayoutTree, NodeId, Vec<NodeId>), StructuralError> {
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(Style {
            flex_direction: FlexDirection::Row,
            ..Style::default()
        });
        let mut children = Vec::new();
        for _ in 0..count {
            let child = tree.new_node_with_style(Style {
                flex_grow: Some(flex_grow),
                flex_basis: basis,
                ..Style::default()
            });
            tree.append_child(root, child)?;
            children.push(child);
        }
        Ok((tree, root, children))
    }

    #[test]
    /// # Panics
    /// Panics if an "at most" root does not shrink to its content.
    fn at_most_root_fits_content() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let (mut tree, root, children) = open_row()?;
        tree.compute_layout_with_modes(
            root,
            Some(200.0),
            Some(100.0),
            MeasureMode::AtMost,
            MeasureMode::AtMost,
            Direction::Ltr,
        )?;

        assert_frame(&tree, root, [0.0, 0.0, 70.0, 10.0])?;
        assert_frame(&tree, children[0], [0.0, 0.0, 30.0, 10.0])?;
        assert_frame(&tree, children[1], [30.0, 0.0, 40.0, 10.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if an exact root does not take the requested size.
    fn exact_root_takes_request() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let (mut tree, root, children) = open_row()?;
        tree.compute_layout_with_modes(
            root,
            Some(200.0),
            Some(100.0),
            MeasureMode::Exactly,
            MeasureMode::Exactly,
            Direction::Ltr,
        )?;

        assert_frame(&tree, root, [0.0, 0.0, 200.0, 100.0])?;
        assert_frame(&tree, children[1], [30.0, 0.0, 40.0, 10.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a size given with an undefined mode constrains the root.
    fn undefined_mode_ignores_size() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let (mut tree, root, _) = open_row()?;
        tree.compute_layout_with_modes(
            root,
            Some(500.0),
            None,
            MeasureMode::Undefined,
            MeasureMode::Exactly,
            Direction::Ltr,
        )?;

        assert_frame(&tree, root, [0.0, 0.0, 70.0, 10.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a measured leaf under an "at most" root is not bounded by it.
    fn at_most_root_bounds_text() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node();
        let label = tree.new_text_node(Style::default(), |_node: NodeId, request: MeasureRequest| {
            let width = request.max_width().map_or(60.0, |max| max.min(60.0));
            Size::new(width, 10.0)
        });
        tree.append_child(root, label)?;
        tree.compute_layout_with_modes(
            root,
            Some(50.0),
            None,
            MeasureMode::AtMost,
            MeasureMode::Undefined,
            Direction::Ltr,
        )?;

        assert_frame(&tree, root, [0.0, 0.0, 50.0, 10.0])?;
        assert_frame(&tree, label, [0.0, 0.0, 50.0, 10.0])?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if zero available space yields anything but empty boxes.
    fn zero_space_collapses_children() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let (mut tree, root, children) = growing_row(3, Value::Auto, 1.0)?;
        tree.compute_layout(root, Some(0.0), Some(0.0), Direction::Ltr)?;

        assert_frame(&tree, root, [0.0, 0.0, 0.0, 0.0])?;
        for child in children {
            assert_sane(&tree, child)?;
            assert_frame(&tree, child, [0.0, 0.0, 0.0, 0.0])?;
        }
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if negative available space produces negative or NaN sizes.
    fn negative_space_clamps_to_zero() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let (mut tree, root, children) = growing_row(2, Value::Auto, 1.0)?;
        tree.compute_layout(root, Some(-50.0), Some(-10.0), Direction::Ltr)?;

        assert_sane(&tree, root)?;
        assert_frame(&tree, root, [0.0, 0.0, 0.0, 0.0])?;
        for child in children {
            assert_sane(&tree, child)?;
            let frame = tree.layout(child)?.frame();
            assert!(frame.width.abs() < 0.01 && frame.height.abs() < 0.01);
        }
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if zero bases with no grow weight produce anything but stacked empty items.
    fn zero_grow_weight_leaves_space_free() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let (mut tree, root, children) = growing_row(3, Value::points(0.0), 0.0)?;
        tree.compute_layout(root, Some(100.0), Some(20.0), Direction::Ltr)?;

        assert_frame(&tree, root, [0.0, 0.0, 100.0, 20.0])?;
        for child in children {
            assert_sane(&tree, child)?;
            assert_frame(&tree, child, [0.0, 0.0, 0.0, 20.0])?;
        }
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if negative point sizes are not treated as unset.
    fn negative_points_act_as_auto() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(Style {
            flex_direction: FlexDirection::Row,
            align_items: Align::FlexStart,
            ..sized(100.0, 50.0)
        });
        let child = tree.new_node_with_style(sized(-20.0, -5.0));
        let label = tree.new_text_node(Style::default(), |_node: NodeId, _request: MeasureRequest| {
            Size::new(-5.0, f32::NAN)
        });
        tree.append_child(root, child)?;
        tree.append_child(root, label)?;
        tree.compute_layout(root, None, None, Direction::Ltr)?;

        assert_frame(&tree, child, [0.0, 0.0, 0.0, 0.0])?;
        assert_sane(&tree, label)?;
        assert_frame(&tree, label, [0.0, 0.0, 0.0, 0.0])?;
        Ok(())
    }
}
