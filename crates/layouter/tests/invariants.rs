#[cfg(test)]
mod tests {
    use layouter::{
        Align, Direction, FlexDirection, Justify, LayoutTree, MeasureRequest, NodeId,
        StructuralError, Size, Style, Value,
    };

    /// Bounds given in points, read back from the node's style.
    fn points(value: Value) -> Option<f32> {
        match value {
            Value::Point(points) => Some(points),
            Value::Percent(_) | Value::Auto | Value::Undefined => None,
        }
    }

    fn assert_within_min_max(tree: &LayoutTree, node: NodeId) -> Result<(), StructuralError> {
        let style = tree.style(node)?;
        let layout = tree.layout(node)?;
        let axes = [
            (layout.width, style.min_width, style.max_width),
            (layout.height, style.min_height, style.max_height),
        ];
        for (size, min, max) in axes {
            if let Some(min) = points(min) {
                assert!(size >= min - 0.01, "{node:?}: {size} below min {min}");
            }
            if let Some(max) = points(max) {
                assert!(size <= max + 0.01, "{node:?}: {size} above max {max}");
            }
        }
        Ok(())
    }

    fn lay_out_children(container: Style, children: Vec<Style>) -> Result<(LayoutTree, Vec<NodeId>), StructuralError> {
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(container);
        let mut ids = Vec::with_capacity(children.len());
        for style in children {
            let child = tree.new_node_with_style(style);
            tree.append_child(root, child)?;
            ids.push(child);
        }
        tree.compute_layout(root, None, None, Direction::Ltr)?;
        Ok((tree, ids))
    }

    fn row(width: f32, height: f32) -> Style {
        Style {
            flex_direction: FlexDirection::Row,
            width: Value::points(width),
            height: Value::points(height),
            ..Style::default()
        }
    }

    #[test]
    /// # Panics
    /// Panics if growing, shrinking or stretching pushes a child outside its min/max.
    fn flexing_respects_min_max() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let grow = |min: f32, max: f32| Style {
            flex_grow: Some(1.0),
            min_width: Value::points(min),
            max_width: Value::points(max),
            ..Style::default()
        };
        let shrink = |min: f32| Style {
            flex_shrink: Some(1.0),
            width: Value::points(80.0),
            min_width: Value::points(min),
            ..Style::default()
        };
        let stretch = |min: f32, max: f32| Style {
            min_height: Value::points(min),
            max_height: Value::points(max),
            width: Value::points(10.0),
            ..Style::default()
        };
        let cases = [
            (row(300.0, 100.0), vec![grow(0.0, 50.0), grow(120.0, 400.0), grow(0.0, 1000.0)]),
            (row(100.0, 100.0), vec![shrink(60.0), shrink(60.0), shrink(0.0)]),
            (row(100.0, 100.0), vec![stretch(0.0, 40.0), stretch(120.0, 200.0)]),
            (
                Style {
                    flex_direction: FlexDirection::Column,
                    ..row(100.0, 300.0)
                },
                vec![
                    Style {
                        flex_grow: Some(1.0),
                        max_height: Value::points(60.0),
                        max_width: Value::points(70.0),
                        ..Style::default()
                    },
                    Style {
                        flex_grow: Some(2.0),
                        min_height: Value::points(250.0),
                        ..Style::default()
                    },
                ],
            ),
        ];
        for (container, children) in cases {
            let (tree, ids) = lay_out_children(container, children)?;
            for child in ids {
                assert_within_min_max(&tree, child)?;
            }
        }
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a measured leaf is sized outside its min/max.
    fn measured_leaves_respect_min_max() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let text = |_node: NodeId, request: MeasureRequest| {
            let width = request.max_width().map_or(60.0, |max| max.min(60.0));
            Size::new(width, 10.0)
        };
        let bounds = [
            (Value::points(30.0), Value::Undefined, Value::points(25.0), Value::Undefined),
            (Value::Undefined, Value::points(80.0), Value::Undefined, Value::points(5.0)),
            (Value::points(20.0), Value::points(20.0), Value::points(10.0), Value::points(10.0)),
        ];
        for align_items in [Align::Stretch, Align::FlexStart] {
            for (max_width, min_width, min_height, max_height) in bounds {
                let mut tree = LayoutTree::new();
                let root = tree.new_node_with_style(Style {
                    align_items,
                    width: Value::points(100.0),
                    ..Style::default()
                });
                let label = tree.new_text_node(
                    Style {
                        max_width,
                        min_width,
                        min_height,
                        max_height,
                        ..Style::default()
                    },
                    text,
                );
                tree.append_child(root, label)?;
                tree.compute_layout(root, None, None, Direction::Ltr)?;
                assert_within_min_max(&tree, label)?;
            }
        }
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if justify-content spacing plus item sizes do not fill the main axis.
    fn justify_spacing_fills_main_axis() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        // (mode, leading, gap, trailing) for items 20 + 30 + 30 in a 200 main axis.
        let cases = [
            (Justify::FlexStart, 0.0, 0.0, 120.0),
            (Justify::Center, 60.0, 0.0, 60.0),
            (Justify::FlexEnd, 120.0, 0.0, 0.0),
            (Justify::SpaceBetween, 0.0, 60.0, 0.0),
            (Justify::SpaceAround, 20.0, 40.0, 20.0),
            (Justify::SpaceEvenly, 30.0, 30.0, 30.0),
        ];
        for flex_direction in [FlexDirection::Row, FlexDirection::Column] {
            for (justify_content, leading, gap, trailing) in cases {
                let container = Style {
                    flex_direction,
                    justify_content,
                    align_items: Align::FlexStart,
                    width: Value::points(200.0),
                    height: Value::points(200.0),
                    ..Style::default()
                };
                let items = [20.0, 30.0, 30.0]
                    .map(|size| Style {
                        width: Value::points(size),
                        height: Value::points(size),
                        ..Style::default()
                    })
                    .to_vec();
                let (tree, ids) = lay_out_children(container, items)?;

                let mut spans = Vec::with_capacity(ids.len());
                for child in &ids {
                    let frame = tree.layout(*child)?.frame();
                    spans.push(if flex_direction.is_row() {
                        (frame.x, frame.width)
                    } else {
                        (frame.y, frame.height)
                    });
                }
                let label = format!("{flex_direction:?} {justify_content:?}");
                let mut covered = 0.0;
                let mut cursor = 0.0;
                for (index, (start, size)) in spans.iter().enumerate() {
                    let space = start - cursor;
                    let expected = if index == 0 { leading } else { gap };
                    assert!((space - expected).abs() < 0.01, "{label}: item {index} space {space}");
                    covered += space + size;
                    cursor = start + size;
                }
                let tail = 200.0 - cursor;
                assert!((tail - trailing).abs() < 0.01, "{label}: trailing {tail}");
                assert!((covered + tail - 200.0).abs() < 0.01, "{label}: covers {}", covered + tail);
            }
        }
        Ok(())
    }
}
