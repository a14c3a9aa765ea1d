#[cfg(test)]
mod tests {
    use layouter::{
        Direction, DirtyKind, LayoutTree, MeasureRequest, NodeId, NodeType, Size, StructuralError,
        Style, Value,
    };

    fn fixed_text(_node: NodeId, _request: MeasureRequest) -> Size {
        Size::new(10.0, 10.0)
    }

    #[test]
    /// # Panics
    /// Panics if children are not kept in insertion order.
    fn insert_keeps_order() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node();
        let first = tree.new_node();
        let second = tree.new_node();
        let middle = tree.new_node();
        tree.append_child(root, first)?;
        tree.append_child(root, second)?;
        tree.insert_child(root, middle, 1)?;

        assert_eq!(tree.children(root)?, vec![first, middle, second]);
        assert_eq!(tree.child_at(root, 2)?, second);
        assert_eq!(tree.parent(middle)?, Some(root));
        assert_eq!(tree.parent(root)?, None);
        assert!(tree.dirty_kind_of(root)?.contains(DirtyKind::STRUCTURE));
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if an attached node can be inserted a second time.
    fn reparenting_is_rejected() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let first_parent = tree.new_node();
        let second_parent = tree.new_node();
        let child = tree.new_node();
        tree.append_child(first_parent, child)?;

        assert_eq!(
            tree.append_child(second_parent, child),
            Err(StructuralError::AlreadyHasParent(child))
        );
        assert_eq!(tree.parent(child)?, Some(first_parent));
        assert_eq!(tree.child_count(second_parent)?, 0);
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a node can become its own ancestor.
    fn cycles_are_rejected() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node();
        let child = tree.new_node();
        tree.append_child(root, child)?;

        assert_eq!(
            tree.append_child(child, root),
            Err(StructuralError::WouldCreateCycle {
                parent: child,
                child: root
            })
        );
        assert_eq!(
            tree.append_child(root, root),
            Err(StructuralError::WouldCreateCycle {
                parent: root,
                child: root
            })
        );
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if indices past the end are accepted.
    fn index_out_of_bounds() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node();
        let child = tree.new_node();

        assert_eq!(
            tree.insert_child(root, child, 1),
            Err(StructuralError::IndexOutOfBounds { index: 1, len: 0 })
        );
        assert_eq!(
            tree.child_at(root, 0),
            Err(StructuralError::IndexOutOfBounds { index: 0, len: 0 })
        );
        assert_eq!(tree.parent(child)?, None);
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if measured leaves accept children or parents accept a measure function.
    fn measure_and_children_exclude_each_other() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let label = tree.new_text_node(Style::default(), fixed_text);
        let child = tree.new_node();
        assert_eq!(
            tree.append_child(label, child),
            Err(StructuralError::HasMeasureFunc(label))
        );
        assert_eq!(tree.node_type(label)?, NodeType::Text);

        let parent = tree.new_node();
        tree.append_child(parent, child)?;
        assert_eq!(
            tree.set_measure(parent, fixed_text),
            Err(StructuralError::HasChildren(parent))
        );
        assert!(!tree.has_measure(parent)?);

        tree.clear_measure(label)?;
        assert_eq!(tree.node_type(label)?, NodeType::Default);
        let grandchild = tree.new_node();
        tree.append_child(label, grandchild)?;
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if removal does not detach the child or leaves stale layout behind.
    fn remove_child_detaches_and_resets() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node_with_style(Style {
            width: Value::points(100.0),
            height: Value::points(100.0),
            ..Style::default()
        });
        let child = tree.new_node_with_style(Style {
            height: Value::points(10.0),
            ..Style::default()
        });
        let stranger = tree.new_node();
        tree.append_child(root, child)?;
        tree.compute_layout(root, None, None, Direction::Ltr)?;
        assert!((tree.layout(child)?.width - 100.0).abs() < f32::EPSILON);

        assert_eq!(
            tree.remove_child(root, stranger),
            Err(StructuralError::NotAChild {
                parent: root,
                child: stranger
            })
        );
        tree.remove_child(root, child)?;
        assert_eq!(tree.parent(child)?, None);
        assert_eq!(tree.child_count(root)?, 0);
        assert!(tree.layout(child)?.width.abs() < f32::EPSILON);
        assert!(tree.is_dirty(root)?);

        // A detached node can be attached elsewhere.
        tree.append_child(stranger, child)?;
        assert_eq!(tree.remove_child_at(stranger, 0)?, child);
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if removed subtrees stay addressable.
    fn removed_subtree_is_unknown() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node();
        let branch = tree.new_node();
        let leaf = tree.new_node();
        tree.append_child(root, branch)?;
        tree.append_child(branch, leaf)?;

        tree.remove_subtree(branch)?;
        assert!(!tree.contains(branch));
        assert!(!tree.contains(leaf));
        assert_eq!(tree.child_count(root)?, 0);
        assert_eq!(tree.layout(leaf), Err(StructuralError::UnknownNode(leaf)));
        assert_eq!(
            tree.compute_layout(branch, None, None, Direction::Ltr),
            Err(StructuralError::UnknownNode(branch))
        );
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if removing all children does not return them in order.
    fn remove_all_children_in_order() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node();
        let first = tree.new_node();
        let second = tree.new_node();
        tree.append_child(root, first)?;
        tree.append_child(root, second)?;

        assert_eq!(tree.remove_all_children(root)?, vec![first, second]);
        assert_eq!(tree.parent(first)?, None);
        assert!(tree.remove_all_children(root)?.is_empty());
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if reset accepts attached nodes or keeps the old style.
    fn reset_restores_defaults() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let root = tree.new_node();
        let child = tree.new_node_with_style(Style {
            width: Value::points(5.0),
            ..Style::default()
        });
        tree.append_child(root, child)?;
        assert_eq!(tree.reset(root), Err(StructuralError::HasChildren(root)));
        assert_eq!(tree.reset(child), Err(StructuralError::AlreadyHasParent(child)));

        tree.remove_child(root, child)?;
        tree.reset(child)?;
        assert_eq!(tree.style(child)?, &Style::default());
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if copying a style does not dirty the target.
    fn copy_style_dirties_target() -> Result<(), StructuralError> {
        let _logger = env_logger::builder().is_test(true).try_init();
        let mut tree = LayoutTree::new();
        let source = tree.new_node_with_style(Style {
            height: Value::points(12.0),
            ..Style::default()
        });
        let target = tree.new_node();
        tree.copy_style(target, source)?;
        assert_eq!(tree.style(target)?, tree.style(source)?);
        assert!(tree.dirty_kind_of(target)?.contains(DirtyKind::STYLE));
        Ok(())
    }
}
