//! Layout model for the centered shop and game-over panels.

use taffy::TaffyTree;
use taffy::prelude::*;

const PANEL_WIDTH: f32 = 460.0;
const PANEL_HEIGHT: f32 = 300.0;
const PANEL_PADDING: f32 = 20.0;
const HEADER_HEIGHT: f32 = 44.0;
const FOOTER_HEIGHT: f32 = 28.0;

pub struct LayoutNodes {
    root: NodeId,
    panel: NodeId,
    header: NodeId,
    body: NodeId,
    footer: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct OverlayLayout {
    pub panel: PanelRect,
    pub header: PanelRect,
    pub body: PanelRect,
    pub footer: PanelRect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>, ui_scale: f32) -> LayoutNodes {
    let s = |value: f32| length(value * ui_scale);
    let header = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: s(HEADER_HEIGHT) },
            ..Default::default()
        })
        .expect("header node");
    let body = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).expect("body node");
    let footer = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: s(FOOTER_HEIGHT) },
            ..Default::default()
        })
        .expect("footer node");
    let panel = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: s(PANEL_WIDTH), height: s(PANEL_HEIGHT) },
                max_size: Size { width: percent(0.95), height: percent(0.95) },
                padding: taffy::Rect {
                    left: length(PANEL_PADDING * ui_scale),
                    right: length(PANEL_PADDING * ui_scale),
                    top: length(PANEL_PADDING * ui_scale),
                    bottom: length(PANEL_PADDING * ui_scale),
                },
                ..Default::default()
            },
            &[header, body, footer],
        )
        .expect("panel node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                justify_content: Some(JustifyContent::Center),
                align_items: Some(AlignItems::Center),
                size: Size { width: percent(1.0), height: percent(1.0) },
                ..Default::default()
            },
            &[panel],
        )
        .expect("root node");
    LayoutNodes { root, panel, header, body, footer }
}

pub fn compute_overlay_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> OverlayLayout {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size).expect("compute layout");

    let l_root = taffy.layout(nodes.root).expect("root layout");
    let l_panel = taffy.layout(nodes.panel).expect("panel layout");
    let l_header = taffy.layout(nodes.header).expect("header layout");
    let l_body = taffy.layout(nodes.body).expect("body layout");
    let l_footer = taffy.layout(nodes.footer).expect("footer layout");

    OverlayLayout {
        panel: panel_rect(l_panel, &[l_root]),
        header: panel_rect(l_header, &[l_root, l_panel]),
        body: panel_rect(l_body, &[l_root, l_panel]),
        footer: panel_rect(l_footer, &[l_root, l_panel]),
    }
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}
