use crate::{Ancestor, Layout, OffsetResolution, Position};

/// Offset of `target` from the top of `ancestor`'s content.
pub(crate) fn target_offset_top<L: Layout>(
    layout: &L,
    ancestor: &Ancestor<L::Node>,
    target: &L::Node,
    resolution: OffsetResolution,
) -> f64 {
    let container = match (ancestor.element(), resolution) {
        (Some(node), OffsetResolution::Scoped) => node,
        _ => return layout.document_offset_top(target),
    };

    let mut offset = 0.0;
    let mut node = Some(target.clone());
    while let Some(cur) = node {
        if cur == *container {
            break;
        }
        offset += layout.offset_top(&cur).unwrap_or(0.0);
        node = layout.parent(&cur);
    }
    offset
}

pub(crate) fn ancestor_height<L: Layout>(layout: &L, ancestor: &Ancestor<L::Node>) -> f64 {
    match ancestor.element() {
        None => layout.viewport_height(),
        Some(node) => layout.client_height(node),
    }
}

/// Absolute scroll offset at which `target` is aligned inside `ancestor` according to
/// `position`.
pub(crate) fn scroll_length<L: Layout>(
    layout: &L,
    ancestor: &Ancestor<L::Node>,
    target: &L::Node,
    position: Position,
    resolution: OffsetResolution,
) -> f64 {
    let offset = target_offset_top(layout, ancestor, target, resolution);
    let view = ancestor_height(layout, ancestor);
    let height = layout.client_height(target);

    match position {
        Position::Start => offset,
        Position::Center => offset - view / 2.0 + height / 2.0,
        Position::End => offset - view + height,
    }
}
