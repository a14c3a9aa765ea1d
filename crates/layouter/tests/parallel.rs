#[cfg(test)]
mod tests {
    use layouter::{Direction, FlexDirection, LayoutTree, NodeId, StructuralError, Style, Value};
    use rayon::prelude::*;

    /// A row of `count` growing children inside a `width`-wide root.
    fn build_row(width: f32, count: usize) -> Result<(LayoutTree, NodeId), StructuralError> {
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(Style {
            flex_direction: FlexDirection::Row,
            width: Value::points(width),
            height: Value::points(20.0),
            ..Style::default()
        });
        for _ in 0..count {
            let child = tree.new_node_with_style(Style {
                flex_grow: Some(1.0),
                ..Style::default()
            });
            tree.append_child(root, child)?;
        }
        Ok((tree, root))
    }

    #[test]
    /// # Panics
    /// Panics if independent trees laid out on worker threads disagree with a serial layout.
    fn independent_trees_lay_out_in_parallel() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut trees = (1..=16)
            .map(|index| build_row(index as f32 * 40.0, 4))
            .collect::<Result<Vec<_>, _>>()?;

        trees
            .par_iter_mut()
            .try_for_each(|(tree, root)| tree.compute_layout(*root, None, None, Direction::Ltr))?;

        for (index, (tree, root)) in trees.iter().enumerate() {
            let expected_width = (index + 1) as f32 * 10.0;
            for child in tree.children(*root)? {
                let width = tree.layout(child)?.width;
                assert!(
                    (width - expected_width).abs() < f32::EPSILON,
                    "tree {index}: child {child:?} is {width} wide, expected {expected_width}"
                );
            }
        }
        Ok(())
    }
}
