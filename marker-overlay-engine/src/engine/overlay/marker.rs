use bevy::prelude::*;

use super::visibility::MarkerVisibility;

/// A 3D location the overlay keeps a marker aligned with.
#[derive(Component, Debug, Clone)]
pub struct TrackedPoint {
    pub index: usize,
    pub world_position: Vec3,
    pub marker: Option<Entity>,
    /// Whether the marker is displayed at all. Independent of the occlusion
    /// decision, which keeps running for hidden points.
    pub shown: bool,
}

/// Screen-space anchor node of a tracked point's marker.
#[derive(Component, Debug, Clone, Copy)]
pub struct PointMarker {
    pub index: usize,
}

/// Presentation surface of a marker: a toggleable "visible" state and a
/// pixel offset from the viewport centre.
pub trait MarkerElement {
    fn has_visible_state(&self) -> bool;
    fn add_visible_state(&mut self);
    fn remove_visible_state(&mut self);
    fn set_offset(&mut self, offset: Vec2);
}

/// Push one frame's decision onto a marker element.
///
/// The visible state is only touched when it differs from the decision.
/// Returns true when the visible state was toggled.
pub fn bind_marker<E: MarkerElement>(
    element: Option<&mut E>,
    visibility: MarkerVisibility,
    offset: Vec2,
) -> bool {
    let Some(element) = element else {
        return false;
    };

    let toggled = match (visibility, element.has_visible_state()) {
        (MarkerVisibility::Visible, false) => {
            element.add_visible_state();
            true
        }
        (MarkerVisibility::Hidden, true) => {
            element.remove_visible_state();
            true
        }
        _ => false,
    };

    if offset.is_finite() {
        element.set_offset(offset);
    }

    toggled
}

/// bevy_ui marker node: `Visibility` carries the visible state, the margin
/// carries the offset from the centred anchor.
pub struct UiMarker<'a> {
    pub node: Mut<'a, Node>,
    pub visibility: Mut<'a, Visibility>,
}

impl MarkerElement for UiMarker<'_> {
    fn has_visible_state(&self) -> bool {
        *self.visibility != Visibility::Hidden
    }

    fn add_visible_state(&mut self) {
        *self.visibility = Visibility::Inherited;
    }

    fn remove_visible_state(&mut self) {
        *self.visibility = Visibility::Hidden;
    }

    fn set_offset(&mut self, offset: Vec2) {
        let margin = UiRect {
            left: Val::Px(offset.x),
            top: Val::Px(offset.y),
            ..default()
        };
        // Avoid flagging the node as changed when nothing moved.
        if self.node.margin != margin {
            self.node.margin = margin;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Default)]
    pub(crate) struct RecordingElement {
        pub visible: bool,
        pub toggles: usize,
        pub offset: Option<Vec2>,
    }

    impl MarkerElement for RecordingElement {
        fn has_visible_state(&self) -> bool {
            self.visible
        }

        fn add_visible_state(&mut self) {
            self.visible = true;
            self.toggles += 1;
        }

        fn remove_visible_state(&mut self) {
            self.visible = false;
            self.toggles += 1;
        }

        fn set_offset(&mut self, offset: Vec2) {
            self.offset = Some(offset);
        }
    }

    #[test]
    fn repeated_outcome_toggles_once() {
        let mut element = RecordingElement::default();

        assert!(bind_marker(Some(&mut element), MarkerVisibility::Visible, Vec2::ZERO));
        assert!(!bind_marker(Some(&mut element), MarkerVisibility::Visible, Vec2::ZERO));
        assert_eq!(element.toggles, 1);
        assert!(element.visible);
    }

    #[test]
    fn hidden_element_stays_untouched_when_hidden_again() {
        let mut element = RecordingElement::default();

        bind_marker(Some(&mut element), MarkerVisibility::Hidden, Vec2::ZERO);
        bind_marker(Some(&mut element), MarkerVisibility::Hidden, Vec2::ZERO);
        assert_eq!(element.toggles, 0);
    }

    #[test]
    fn offset_applied_every_frame() {
        let mut element = RecordingElement::default();

        bind_marker(Some(&mut element), MarkerVisibility::Visible, Vec2::new(10.0, -4.0));
        assert_eq!(element.offset, Some(Vec2::new(10.0, -4.0)));
        bind_marker(Some(&mut element), MarkerVisibility::Visible, Vec2::new(12.0, -4.0));
        assert_eq!(element.offset, Some(Vec2::new(12.0, -4.0)));
    }

    #[test]
    fn degenerate_offset_is_skipped() {
        let mut element = RecordingElement::default();

        bind_marker(Some(&mut element), MarkerVisibility::Visible, Vec2::new(f32::NAN, 0.0));
        assert!(element.visible);
        assert_eq!(element.offset, None);
    }

    #[test]
    fn unbound_point_is_a_no_op() {
        assert!(!bind_marker::<RecordingElement>(
            None,
            MarkerVisibility::Visible,
            Vec2::ZERO
        ));
    }

    fn spawn_marker(world: &mut World, index: usize, visibility: Visibility) -> Entity {
        world
            .spawn((PointMarker { index }, Node::default(), visibility))
            .id()
    }

    fn bind_ui(
        world: &mut World,
        entity: Entity,
        visibility: MarkerVisibility,
        offset: Vec2,
    ) -> bool {
        let (node, current) = world
            .query::<(&mut Node, &mut Visibility)>()
            .get_mut(world, entity)
            .unwrap();
        let mut element = UiMarker {
            node,
            visibility: current,
        };
        bind_marker(Some(&mut element), visibility, offset)
    }

    fn node_state(world: &mut World, entity: Entity) -> (Visibility, UiRect) {
        let (node, visibility) = world
            .query::<(&Node, &Visibility)>()
            .get(world, entity)
            .unwrap();
        (*visibility, node.margin)
    }

    #[test]
    fn ui_marker_maps_decisions_onto_nodes() {
        let mut world = World::new();
        let shown = spawn_marker(&mut world, 0, Visibility::Hidden);
        let occluded = spawn_marker(&mut world, 1, Visibility::Hidden);

        assert!(bind_ui(
            &mut world,
            shown,
            MarkerVisibility::Visible,
            Vec2::new(480.0, -270.0)
        ));
        assert!(!bind_ui(
            &mut world,
            occluded,
            MarkerVisibility::Hidden,
            Vec2::new(-12.0, 30.0)
        ));

        let (visibility, margin) = node_state(&mut world, shown);
        assert_eq!(visibility, Visibility::Inherited);
        assert_eq!(margin.left, Val::Px(480.0));
        assert_eq!(margin.top, Val::Px(-270.0));

        let (visibility, margin) = node_state(&mut world, occluded);
        assert_eq!(visibility, Visibility::Hidden);
        assert_eq!(margin.left, Val::Px(-12.0));
        assert_eq!(margin.top, Val::Px(30.0));
    }

    #[test]
    fn ui_marker_hides_once_when_occluded() {
        let mut world = World::new();
        let marker = spawn_marker(&mut world, 0, Visibility::Inherited);

        assert!(bind_ui(&mut world, marker, MarkerVisibility::Hidden, Vec2::ZERO));
        assert!(!bind_ui(&mut world, marker, MarkerVisibility::Hidden, Vec2::ZERO));
        assert_eq!(node_state(&mut world, marker).0, Visibility::Hidden);
    }
}
