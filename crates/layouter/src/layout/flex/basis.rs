//! Step 3: the flex base size of every in-flow child.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-item>

use flexbox::floats_equal;
use flexbox_style::{Align, Dimension, Display, FlexDirection, Overflow, PositionType};
use indextree::NodeId;
use log::trace;

use super::FlexPass;
use crate::layout::resolve::{BoxModel as _, align_item};
use crate::layout::{LayoutRequest, UNDEFINED, or_undefined};
use crate::measure::MeasureMode;
use crate::tree::LayoutTree;

/// Where a child's flex basis comes from.
enum BasisSource {
    /// Still valid from an earlier pass.
    Cached,
    /// A definite `flex-basis` or preferred main size.
    Definite(f32),
    /// Sized by laying out the child's content.
    Content,
}

/// A constraint on one dimension of a child being measured for its basis.
#[derive(Copy, Clone)]
struct Constraint {
    size: f32,
    mode: MeasureMode,
}

impl Constraint {
    const OPEN: Self = Self {
        size: UNDEFINED,
        mode: MeasureMode::Undefined,
    };

    #[inline]
    const fn exactly(size: f32) -> Self {
        Self {
            size,
            mode: MeasureMode::Exactly,
        }
    }
}

impl LayoutTree {
    /// Determine every child's flex basis and return the sum of the outer
    /// bases of the in-flow children.
    pub(super) fn compute_flex_bases(&mut self, pass: &FlexPass, children: &[NodeId]) -> f32 {
        let single_flex_child = self.single_flex_child(pass, children);
        let [inner_width, inner_height] = pass.inner_sizes();
        let (main_inner, cross_inner) = if pass.is_main_row() {
            (inner_width, inner_height)
        } else {
            (inner_height, inner_width)
        };
        let mut total_outer_basis = 0.0f32;
        for &child in children {
            let data = self.node(child);
            if data.style.display == Display::None {
                self.zero_out_subtree(child);
                continue;
            }
            if pass.perform_layout {
                let child_direction = data.style.direction.resolve(pass.direction);
                self.set_position(child, child_direction, main_inner, cross_inner, inner_width);
            }
            if self.node(child).style.position_type == PositionType::Absolute {
                continue;
            }
            if single_flex_child == Some(child) {
                let generation = self.generation;
                let layout = &mut self.node_mut(child).layout;
                layout.computed_flex_basis = 0.0;
                layout.flex_basis_generation = generation;
            } else {
                self.compute_flex_basis_for_child(pass, child);
            }
            let data = self.node(child);
            total_outer_basis +=
                data.layout.computed_flex_basis + data.style.margin_for_axis(pass.main_axis, inner_width);
        }
        total_outer_basis
    }

    /// With an exact main size, a lone child that can both grow and shrink
    /// will absorb all free space; its content never matters, so skip
    /// measuring it.
    fn single_flex_child(&self, pass: &FlexPass, children: &[NodeId]) -> Option<NodeId> {
        if pass.main_mode != MeasureMode::Exactly {
            return None;
        }
        let web = self.config.use_web_defaults;
        let mut single = None;
        for &child in children {
            let style = &self.node(child).style;
            if !style.is_flexible(false, web) {
                continue;
            }
            if single.is_some()
                || floats_equal(style.flex_grow_factor(false), 0.0)
                || floats_equal(style.flex_shrink_factor(false, web), 0.0)
            {
                return None;
            }
            single = Some(child);
        }
        single
    }

    fn compute_flex_basis_for_child(&mut self, pass: &FlexPass, child: NodeId) {
        let [inner_width, inner_height] = pass.inner_sizes();
        let main_axis = pass.main_axis;
        let is_main_row = pass.is_main_row();
        let main_size = if is_main_row { inner_width } else { inner_height };
        let web_flex_basis = self.config.web_flex_basis;
        let generation = self.generation;
        let data = self.node(child);
        let style = &data.style;
        let resolved_basis = or_undefined(
            style
                .flex_basis_value(self.config.use_web_defaults)
                .resolve(main_size),
        );
        let row_defined = style.is_style_dim_defined(FlexDirection::Row, inner_width);
        let column_defined = style.is_style_dim_defined(FlexDirection::Column, inner_height);
        let padding_border = style.padding_and_border_for_axis(main_axis, inner_width);
        let reference = [main_size, inner_width];

        let source = if !resolved_basis.is_nan() && !main_size.is_nan() {
            let layout = &data.layout;
            let stale = layout.computed_flex_basis.is_nan()
                || (web_flex_basis && layout.flex_basis_generation != generation)
                || !floats_equal(layout.flex_basis_reference[0], reference[0])
                || !floats_equal(layout.flex_basis_reference[1], reference[1]);
            if stale {
                BasisSource::Definite(resolved_basis.max(padding_border))
            } else {
                BasisSource::Cached
            }
        } else if is_main_row && row_defined {
            let width = or_undefined(style.resolved_dimension(Dimension::Width).resolve(inner_width));
            BasisSource::Definite(width.max(padding_border))
        } else if !is_main_row && column_defined {
            let height =
                or_undefined(style.resolved_dimension(Dimension::Height).resolve(inner_height));
            BasisSource::Definite(height.max(padding_border))
        } else {
            BasisSource::Content
        };

        let basis = match source {
            BasisSource::Cached => None,
            BasisSource::Definite(basis) => Some(basis),
            BasisSource::Content => Some(self.measure_flex_basis(pass, child, row_defined, column_defined)),
        };
        let layout = &mut self.node_mut(child).layout;
        if let Some(basis) = basis {
            layout.computed_flex_basis = basis;
        }
        layout.flex_basis_reference = reference;
        layout.flex_basis_generation = generation;
        trace!(
            target: "layouter::flex",
            "[FLEX-BASIS] {child:?} basis={:.3}{}",
            layout.computed_flex_basis,
            if basis.is_none() { " (cached)" } else { "" }
        );
    }

    /// Lay the child out without a definite basis and use its main size.
    ///
    /// Defined sizes are used exactly; otherwise the container's inner size
    /// bounds the child, except along the main axis of a scrolling container.
    /// A stretched cross size is passed exactly so that content wraps the way
    /// it will in the final layout.
    fn measure_flex_basis(
        &mut self,
        pass: &FlexPass,
        child: NodeId,
        row_defined: bool,
        column_defined: bool,
    ) -> f32 {
        let [inner_width, inner_height] = pass.inner_sizes();
        let is_main_row = pass.is_main_row();
        let style = &self.node(child).style;
        let margin_row = style.margin_for_axis(FlexDirection::Row, inner_width);
        let margin_column = style.margin_for_axis(FlexDirection::Column, inner_width);

        let mut width = Constraint::OPEN;
        let mut height = Constraint::OPEN;
        if row_defined {
            width = Constraint::exactly(
                or_undefined(style.resolved_dimension(Dimension::Width).resolve(inner_width))
                    + margin_row,
            );
        }
        if column_defined {
            height = Constraint::exactly(
                or_undefined(style.resolved_dimension(Dimension::Height).resolve(inner_height))
                    + margin_column,
            );
        }

        let scrolls = pass.style.overflow == Overflow::Scroll;
        if (!scrolls || !is_main_row) && width.size.is_nan() && !inner_width.is_nan() {
            width = Constraint {
                size: inner_width,
                mode: MeasureMode::AtMost,
            };
        }
        if (!scrolls || is_main_row) && height.size.is_nan() && !inner_height.is_nan() {
            height = Constraint {
                size: inner_height,
                mode: MeasureMode::AtMost,
            };
        }

        let aspect_ratio = style.aspect_ratio();
        if let Some(ratio) = aspect_ratio {
            if !is_main_row && width.mode == MeasureMode::Exactly {
                height = Constraint::exactly(margin_column + (width.size - margin_row) / ratio);
            } else if is_main_row && height.mode == MeasureMode::Exactly {
                width = Constraint::exactly(margin_row + (height.size - margin_column) * ratio);
            }
        }

        let stretches = align_item(&pass.style, style) == Align::Stretch;
        let has_exact_width = !inner_width.is_nan() && pass.modes[0] == MeasureMode::Exactly;
        if !is_main_row && !row_defined && has_exact_width && stretches && width.mode != MeasureMode::Exactly {
            width = Constraint::exactly(inner_width);
            if let Some(ratio) = aspect_ratio {
                height = Constraint::exactly((width.size - margin_row) / ratio);
            }
        }
        let has_exact_height = !inner_height.is_nan() && pass.modes[1] == MeasureMode::Exactly;
        if is_main_row && !column_defined && has_exact_height && stretches && height.mode != MeasureMode::Exactly {
            height = Constraint::exactly(inner_height);
            if let Some(ratio) = aspect_ratio {
                width = Constraint::exactly((height.size - margin_column) * ratio);
            }
        }

        let (width_mode, width_size) = style.constrain_max_size_for_mode(
            FlexDirection::Row,
            inner_width,
            inner_width,
            width.mode,
            width.size,
        );
        let (height_mode, height_size) = style.constrain_max_size_for_mode(
            FlexDirection::Column,
            inner_height,
            inner_width,
            height.mode,
            height.size,
        );

        self.layout_node(
            child,
            LayoutRequest {
                available: [width_size, height_size],
                modes: [width_mode, height_mode],
                parent_size: [inner_width, inner_height],
                parent_direction: pass.direction,
                perform_layout: false,
                reason: "measure",
            },
        );
        let data = self.node(child);
        data.layout
            .measured(pass.main_axis.dimension())
            .max(data.style.padding_and_border_for_axis(pass.main_axis, inner_width))
    }
}
