//! Preset Waypoints Module
//!
//! Named camera poses for the quick-jump navigation menu. Selecting a
//! waypoint raises a `PresetJump` intent; the state machine decides whether
//! the jump is allowed from the current mode.

use glam::Vec3;

use crate::camera::CameraTransform;
use crate::exhibits::ExhibitRegistry;
use crate::navigation::intent::MotionIntent;
use crate::navigation::navigator::Navigator;

/// One named camera pose in the quick-jump menu.
#[derive(Clone, Debug)]
pub struct Waypoint {
    /// Stable identifier used by the UI shell
    pub id: String,
    /// Label shown on the menu button
    pub label: String,
    /// Pose applied when the jump is accepted
    pub transform: CameraTransform,
}

/// Ordered collection of waypoints, looked up by id.
#[derive(Clone, Debug)]
pub struct WaypointSet {
    waypoints: Vec<Waypoint>,
}

impl WaypointSet {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Look up a waypoint by id.
    pub fn get(&self, id: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id == id)
    }

    /// Iterate waypoints in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Build the jump intent for a waypoint, if it exists.
    pub fn jump_intent(&self, id: &str) -> Option<MotionIntent> {
        self.get(id).map(|w| MotionIntent::PresetJump {
            transform: w.transform,
        })
    }

    /// Submit a jump to a named waypoint.
    ///
    /// Unknown ids are a no-op. Returns whether the navigator accepted the
    /// jump; it stays free to reject one mid-flight.
    pub fn jump_to(
        &self,
        id: &str,
        navigator: &mut Navigator,
        registry: &ExhibitRegistry,
        now_ms: f64,
    ) -> bool {
        match self.jump_intent(id) {
            Some(intent) => navigator.submit(intent, registry, now_ms),
            None => false,
        }
    }

    /// The menu as shipped: entrance, one stop per exhibit wall, and the
    /// photo table corner.
    pub fn default_tour() -> Self {
        let facing = |position: Vec3, look_toward: Vec3| {
            let mut t = CameraTransform::at(position);
            t.look_at(look_toward);
            t
        };

        Self::new(vec![
            Waypoint {
                id: "entrance".to_string(),
                label: "Entrance".to_string(),
                transform: facing(Vec3::new(0.0, 2.5, 6.5), Vec3::new(0.0, 2.5, -6.9)),
            },
            Waypoint {
                id: "front-wall".to_string(),
                label: "Front Wall".to_string(),
                transform: facing(Vec3::new(0.0, 2.5, -3.0), Vec3::new(0.0, 2.5, -6.9)),
            },
            Waypoint {
                id: "west-wall".to_string(),
                label: "West Wall".to_string(),
                transform: facing(Vec3::new(-4.0, 2.5, 0.0), Vec3::new(-7.4, 2.5, 0.0)),
            },
            Waypoint {
                id: "east-wall".to_string(),
                label: "East Wall".to_string(),
                transform: facing(Vec3::new(4.0, 2.5, 0.0), Vec3::new(8.0, 2.5, 0.0)),
            },
            Waypoint {
                id: "photo-table".to_string(),
                label: "Photo Table".to_string(),
                transform: facing(Vec3::new(4.0, 2.5, 7.0), Vec3::new(2.0, 1.0, 5.0)),
            },
        ])
    }
}

impl Default for WaypointSet {
    fn default() -> Self {
        Self::default_tour()
    }
}
