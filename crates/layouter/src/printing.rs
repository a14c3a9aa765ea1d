//! Human-readable dumps of a laid-out tree.

use core::fmt::{self, Write as _};
use core::ops::BitOr;

use flexbox_style::{Edge, Edges, Style, Value};
use indextree::NodeId;

use crate::error::StructuralError;
use crate::tree::LayoutTree;

/// What [`LayoutTree::print_tree`] includes for each node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PrintOptions(u8);

impl PrintOptions {
    pub const NONE: Self = Self(0);
    /// The rounded frame.
    pub const LAYOUT: Self = Self(1);
    /// Style properties that differ from the defaults.
    pub const STYLE: Self = Self(1 << 1);
    /// Recurse into children.
    pub const CHILDREN: Self = Self(1 << 2);
    pub const ALL: Self = Self(0b111);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PrintOptions {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

const EDGE_SLOTS: [Edge; Edge::COUNT] = [
    Edge::Left,
    Edge::Top,
    Edge::Right,
    Edge::Bottom,
    Edge::Start,
    Edge::End,
    Edge::Horizontal,
    Edge::Vertical,
    Edge::All,
];

/// Writes `name: value; ` when `value` differs from `default`.
fn write_if_changed<T>(out: &mut String, name: &str, value: T, default: T) -> fmt::Result
where
    T: PartialEq + fmt::Display,
{
    if value == default {
        return Ok(());
    }
    write!(out, "{name}: {value}; ")
}

fn write_value(out: &mut String, name: &str, value: Value, default: Value) -> fmt::Result {
    if value.approx_eq(default) {
        return Ok(());
    }
    write!(out, "{name}: {value}; ")
}

fn write_edges(out: &mut String, prefix: &str, edges: &Edges) -> fmt::Result {
    for edge in EDGE_SLOTS {
        let value = edges.get(edge);
        if !value.is_undefined() {
            write!(out, "{prefix}-{edge}: {value}; ")?;
        }
    }
    Ok(())
}

fn write_optional(out: &mut String, name: &str, value: Option<f32>) -> fmt::Result {
    match value {
        Some(number) => write!(out, "{name}: {number}; "),
        None => Ok(()),
    }
}

/// The non-default properties of `style`, CSS-like.
fn style_declarations(style: &Style) -> Result<String, fmt::Error> {
    let defaults = Style::default();
    let mut out = String::new();
    write_if_changed(&mut out, "direction", style.direction, defaults.direction)?;
    write_if_changed(&mut out, "flex-direction", style.flex_direction, defaults.flex_direction)?;
    write_if_changed(&mut out, "justify-content", style.justify_content, defaults.justify_content)?;
    write_if_changed(&mut out, "align-content", style.align_content, defaults.align_content)?;
    write_if_changed(&mut out, "align-items", style.align_items, defaults.align_items)?;
    write_if_changed(&mut out, "align-self", style.align_self, defaults.align_self)?;
    write_if_changed(&mut out, "position", style.position_type, defaults.position_type)?;
    write_if_changed(&mut out, "flex-wrap", style.flex_wrap, defaults.flex_wrap)?;
    write_if_changed(&mut out, "overflow", style.overflow, defaults.overflow)?;
    write_if_changed(&mut out, "display", style.display, defaults.display)?;
    write_optional(&mut out, "flex", style.flex)?;
    write_optional(&mut out, "flex-grow", style.flex_grow)?;
    write_optional(&mut out, "flex-shrink", style.flex_shrink)?;
    write_value(&mut out, "flex-basis", style.flex_basis, defaults.flex_basis)?;
    write_edges(&mut out, "margin", &style.margin)?;
    write_edges(&mut out, "padding", &style.padding)?;
    write_edges(&mut out, "border", &style.border)?;
    write_edges(&mut out, "position", &style.position)?;
    write_value(&mut out, "width", style.width, defaults.width)?;
    write_value(&mut out, "height", style.height, defaults.height)?;
    write_value(&mut out, "min-width", style.min_width, defaults.min_width)?;
    write_value(&mut out, "min-height", style.min_height, defaults.min_height)?;
    write_value(&mut out, "max-width", style.max_width, defaults.max_width)?;
    write_value(&mut out, "max-height", style.max_height, defaults.max_height)?;
    write_optional(&mut out, "aspect-ratio", style.aspect_ratio)?;
    Ok(out)
}

fn write_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

impl LayoutTree {
    /// Render the subtree at `node` as indented `<div>` markup.
    pub fn print_tree(&self, node: NodeId, options: PrintOptions) -> Result<String, StructuralError> {
        self.ensure_node(node)?;
        let mut out = String::new();
        // Writing into a String cannot fail.
        if self.print_node(&mut out, node, options, 0).is_err() {
            out.clear();
        }
        Ok(out)
    }

    fn print_node(&self, out: &mut String, node: NodeId, options: PrintOptions, depth: usize) -> fmt::Result {
        let data = self.node(node);
        write_indent(out, depth);
        out.push_str("<div");
        if options.contains(PrintOptions::LAYOUT) {
            let frame = data.layout.rounded;
            write!(
                out,
                " layout=\"width: {}; height: {}; top: {}; left: {};\"",
                frame.width, frame.height, frame.y, frame.x
            )?;
        }
        if options.contains(PrintOptions::STYLE) {
            let declarations = style_declarations(&data.style)?;
            if !declarations.is_empty() {
                write!(out, " style=\"{}\"", declarations.trim_end())?;
            }
        }
        if data.measure.is_some() {
            out.push_str(" has-measure=\"true\"");
        }
        out.push('>');

        let children = self.child_ids(node);
        if options.contains(PrintOptions::CHILDREN) && !children.is_empty() {
            out.push('\n');
            for child in children {
                self.print_node(out, child, options, depth + 1)?;
            }
            write_indent(out, depth);
        }
        out.push_str("</div>\n");
        Ok(())
    }
}

impl fmt::Debug for LayoutTree {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "LAYOUT")?;
        let roots = self
            .arena
            .iter()
            .filter(|entry| !entry.is_removed() && entry.parent().is_none())
            .filter_map(|entry| self.arena.get_node_id(entry));
        for root in roots {
            let mut out = String::new();
            self.print_node(&mut out, root, PrintOptions::ALL, 0)?;
            formatter.write_str(&out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use flexbox_style::FlexDirection;

    use super::*;

    #[test]
    /// # Panics
    /// Panics if default properties are printed or changed ones are missing.
    fn prints_only_changed_properties() {
        let style = Style {
            flex_direction: FlexDirection::Row,
            width: Value::points(100.0),
            margin: Edges::new().with(Edge::Left, Value::points(5.0)),
            ..Style::default()
        };
        let declarations = style_declarations(&style).unwrap_or_default();
        assert_eq!(declarations, "flex-direction: row; margin-left: 5px; width: 100px; ");
        assert_eq!(style_declarations(&Style::default()).unwrap_or_default(), "");
    }

    #[test]
    /// # Panics
    /// Panics if option flags do not combine.
    fn options_combine() {
        let options = PrintOptions::LAYOUT | PrintOptions::CHILDREN;
        assert!(options.contains(PrintOptions::LAYOUT));
        assert!(!options.contains(PrintOptions::STYLE));
        assert!(PrintOptions::ALL.contains(options));
    }
}
