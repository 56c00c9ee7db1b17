//! Navigation Tests - State Machine and Animated Transitions
//!
//! End-to-end tests for the navigation state machine: click-to-move flights,
//! exhibit zoom lifecycle, intent arbitration, preset jumps, and the
//! interactive table. All time is fed explicitly, so every scenario is
//! deterministic.

use glam::Vec3;
use museum_engine::exhibits::ExhibitRegistry;
use museum_engine::navigation::{
    LocomoteAxis, MotionIntent, NavEvent, NavigationConfig, NavigationMode, Navigator, WaypointSet,
};
use museum_engine::world::FloorBounds;

fn setup() -> (Navigator, ExhibitRegistry) {
    (Navigator::default(), ExhibitRegistry::default_museum())
}

/// Run update at a fixed 16ms step from `from_ms` up to and including `to_ms`.
fn run(nav: &mut Navigator, from_ms: f64, to_ms: f64) {
    let mut t = from_ms;
    while t < to_ms {
        t += 16.0;
        nav.update(t.min(to_ms));
    }
}

// ============================================================================
// Click-to-Move Tests
// ============================================================================

#[test]
fn test_move_flight_lifecycle() {
    let (mut nav, registry) = setup();
    assert!(nav.submit(
        MotionIntent::MoveTo {
            point: Vec3::new(3.0, 0.0, 2.0),
        },
        &registry,
        0.0,
    ));
    assert_eq!(nav.mode(), NavigationMode::Moving);
    assert!(nav.status().destination_visible);

    run(&mut nav, 0.0, 1000.0);
    assert_eq!(nav.mode(), NavigationMode::Idle);
    assert!(!nav.status().destination_visible);
    // Target reached exactly, at eye height
    assert_eq!(nav.transform().position, Vec3::new(3.0, 2.5, 2.0));
    assert!(nav.drain_events().contains(&NavEvent::MoveCompleted));
}

#[test]
fn test_move_preserves_look_direction() {
    let (mut nav, registry) = setup();
    nav.submit(
        MotionIntent::Look {
            delta_yaw: 0.6,
            delta_pitch: -0.1,
        },
        &registry,
        0.0,
    );
    nav.update(16.0);
    let yaw_before = nav.transform().yaw;

    nav.submit(
        MotionIntent::MoveTo {
            point: Vec3::new(-2.0, 0.0, 3.0),
        },
        &registry,
        32.0,
    );
    run(&mut nav, 32.0, 1100.0);
    // Gliding does not reorient the camera
    assert!((nav.transform().yaw - yaw_before).abs() < 1e-5);
}

#[test]
fn test_move_eases_slow_start_fast_middle() {
    let (mut nav, registry) = setup();
    nav.submit(
        MotionIntent::MoveTo {
            point: Vec3::new(4.0, 0.0, 0.0),
        },
        &registry,
        0.0,
    );
    nav.update(100.0);
    let early = nav.transform().position.x;
    nav.update(500.0);
    let mid = nav.transform().position.x;
    nav.update(600.0);
    let past_mid = nav.transform().position.x;

    // First 10% of the flight covers far less than 10% of the distance
    assert!(early < 0.4 * 0.1);
    // Midpoint of the eased curve is the halfway point
    assert!((mid - 2.0).abs() < 0.01);
    // The middle of the flight is the fastest stretch
    assert!(past_mid - mid > early);
}

#[test]
fn test_move_target_clamped_to_bounds() {
    let (mut nav, registry) = setup();
    nav.submit(
        MotionIntent::MoveTo {
            point: Vec3::new(100.0, 0.0, -100.0),
        },
        &registry,
        0.0,
    );
    run(&mut nav, 0.0, 1000.0);
    let pos = nav.transform().position;
    assert_eq!(pos.x, 7.0);
    assert_eq!(pos.z, -6.5);
}

// ============================================================================
// Zoom Lifecycle Tests
// ============================================================================

#[test]
fn test_zoom_full_lifecycle() {
    let (mut nav, registry) = setup();
    // Walk somewhere and look around first
    nav.submit(
        MotionIntent::Locomote {
            axis: LocomoteAxis::Strafe,
            amount: 1.5,
        },
        &registry,
        0.0,
    );
    nav.submit(
        MotionIntent::Look {
            delta_yaw: -0.4,
            delta_pitch: 0.1,
        },
        &registry,
        16.0,
    );
    nav.update(32.0);
    nav.update(48.0);
    let stood = *nav.transform();

    // Zoom in on a front wall painting
    assert!(nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "teal-serenity".to_string(),
        },
        &registry,
        100.0,
    ));
    assert_eq!(nav.mode(), NavigationMode::ZoomingIn);

    run(&mut nav, 100.0, 1300.0);
    assert_eq!(nav.mode(), NavigationMode::ZoomedIn);
    // Viewing pose: 3 units off the front wall, facing the painting
    let pos = nav.transform().position;
    assert!((pos - Vec3::new(-2.0, 2.5, -3.9)).length() < 1e-3);
    let forward = nav.transform().forward();
    let to_painting = (Vec3::new(-2.0, 2.5, -6.9) - pos).normalize();
    assert!(forward.dot(to_painting) > 0.999);

    // Popup is due exactly at arrival
    let events = nav.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        NavEvent::ExhibitDisplayed { exhibit_id, display_name, .. }
            if exhibit_id == "teal-serenity" && display_name == "Teal Serenity"
    )));

    // Zoom out returns exactly to the saved pose
    assert!(nav.submit(MotionIntent::ZoomOut, &registry, 3000.0));
    run(&mut nav, 3000.0, 4200.0);
    assert_eq!(nav.mode(), NavigationMode::Idle);
    assert_eq!(nav.transform().position, stood.position);
    assert_eq!(nav.transform().yaw, stood.yaw);
    assert_eq!(nav.transform().pitch, stood.pitch);
    assert!(nav.drain_events().contains(&NavEvent::ZoomOutCompleted));
}

#[test]
fn test_zoom_side_wall_offsets_along_x() {
    let (mut nav, registry) = setup();
    // West wall painting at (-7.4, 2.5, 0): viewing position at (-4.4, 2.5, 0)
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "sage-wisdom".to_string(),
        },
        &registry,
        0.0,
    );
    run(&mut nav, 0.0, 1200.0);
    let pos = nav.transform().position;
    assert!((pos - Vec3::new(-4.4, 2.5, 0.0)).length() < 1e-3);
    // Facing west
    assert!(nav.transform().forward().x < -0.99);
}

#[test]
fn test_zoom_display_cancelled_by_new_zoom() {
    let (mut nav, registry) = setup();
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "mint-harmony".to_string(),
        },
        &registry,
        0.0,
    );
    run(&mut nav, 0.0, 600.0);
    assert_eq!(nav.mode(), NavigationMode::ZoomingIn);

    // Second zoom mid-flight, before the first popup is due
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "sunny-disposition".to_string(),
        },
        &registry,
        600.0,
    );
    run(&mut nav, 600.0, 6000.0);
    let events = nav.drain_events();
    assert!(!events.iter().any(|e| matches!(
        e,
        NavEvent::ExhibitDisplayed { exhibit_id, .. } if exhibit_id == "mint-harmony"
    )));
    assert!(events.iter().any(|e| matches!(
        e,
        NavEvent::ExhibitDisplayed { exhibit_id, .. } if exhibit_id == "sunny-disposition"
    )));
}

#[test]
fn test_zoom_out_cancels_narration() {
    let (mut nav, registry) = setup();
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "emerald-forest".to_string(),
        },
        &registry,
        0.0,
    );
    run(&mut nav, 0.0, 1200.0);
    nav.drain_events();

    nav.submit(MotionIntent::ZoomOut, &registry, 1500.0);
    assert!(nav.drain_events().contains(&NavEvent::NarrationCancelled));
}

#[test]
fn test_zoom_chained_from_zoomed_in() {
    let (mut nav, registry) = setup();
    let stood = *nav.transform();
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "rose-blush".to_string(),
        },
        &registry,
        0.0,
    );
    run(&mut nav, 0.0, 1200.0);

    // Zoom to another painting directly from the viewing pose
    assert!(nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "purple-majesty".to_string(),
        },
        &registry,
        1500.0,
    ));
    run(&mut nav, 1500.0, 2700.0);
    assert_eq!(nav.mode(), NavigationMode::ZoomedIn);
    assert!((nav.transform().position - Vec3::new(5.0, 2.5, -3.0)).length() < 1e-3);

    // Zoom-out returns to the pose at the second acceptance (the first
    // viewing pose), not the original standing pose
    nav.submit(MotionIntent::ZoomOut, &registry, 3000.0);
    run(&mut nav, 3000.0, 4200.0);
    assert!((nav.transform().position - Vec3::new(5.0, 2.5, 0.0)).length() < 1e-3);
    assert!((nav.transform().position - stood.position).length() > 1.0);
}

// ============================================================================
// Arbitration Tests
// ============================================================================

#[test]
fn test_zoom_outranks_move() {
    let (mut nav, registry) = setup();
    nav.submit(
        MotionIntent::MoveTo {
            point: Vec3::new(5.0, 0.0, 5.0),
        },
        &registry,
        0.0,
    );
    run(&mut nav, 0.0, 300.0);

    assert!(nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "golden-dreams".to_string(),
        },
        &registry,
        300.0,
    ));
    run(&mut nav, 300.0, 5000.0);
    let events = nav.drain_events();
    assert!(!events.contains(&NavEvent::MoveCompleted));
    assert_eq!(nav.mode(), NavigationMode::ZoomedIn);
    assert!((nav.transform().position - Vec3::new(2.0, 2.5, -3.9)).length() < 1e-3);
}

#[test]
fn test_move_dropped_during_every_zoom_phase() {
    let (mut nav, registry) = setup();
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "coral-passion".to_string(),
        },
        &registry,
        0.0,
    );
    let move_intent = MotionIntent::MoveTo {
        point: Vec3::new(1.0, 0.0, 1.0),
    };

    // ZoomingIn
    nav.update(600.0);
    assert!(!nav.submit(move_intent.clone(), &registry, 600.0));
    // ZoomedIn
    run(&mut nav, 600.0, 1200.0);
    assert!(!nav.submit(move_intent.clone(), &registry, 1200.0));
    // ZoomingOut
    nav.submit(MotionIntent::ZoomOut, &registry, 1300.0);
    nav.update(1400.0);
    assert!(!nav.submit(move_intent, &registry, 1400.0));
}

#[test]
fn test_continuous_intents_dropped_while_animating() {
    let (mut nav, registry) = setup();
    nav.submit(
        MotionIntent::MoveTo {
            point: Vec3::new(3.0, 0.0, 2.0),
        },
        &registry,
        0.0,
    );
    nav.update(200.0);
    let mid_pose = *nav.transform();

    assert!(!nav.submit(
        MotionIntent::Look {
            delta_yaw: 1.0,
            delta_pitch: 0.5,
        },
        &registry,
        200.0,
    ));
    assert!(!nav.submit(
        MotionIntent::Locomote {
            axis: LocomoteAxis::Forward,
            amount: 5.0,
        },
        &registry,
        200.0,
    ));
    assert_eq!(*nav.transform(), mid_pose);
}

#[test]
fn test_walk_then_look_then_walk() {
    let (mut nav, registry) = setup();
    // The continuous modes flow into each other without gating
    assert!(nav.submit(
        MotionIntent::Locomote {
            axis: LocomoteAxis::Forward,
            amount: 0.5,
        },
        &registry,
        0.0,
    ));
    assert_eq!(nav.mode(), NavigationMode::Locomoting);
    assert!(nav.submit(
        MotionIntent::Look {
            delta_yaw: 0.2,
            delta_pitch: 0.0,
        },
        &registry,
        16.0,
    ));
    assert_eq!(nav.mode(), NavigationMode::FreeLook);
    assert!(nav.submit(
        MotionIntent::Locomote {
            axis: LocomoteAxis::Strafe,
            amount: 0.5,
        },
        &registry,
        32.0,
    ));
    assert_eq!(nav.mode(), NavigationMode::Locomoting);
}

// ============================================================================
// Preset Waypoint Tests
// ============================================================================

#[test]
fn test_preset_jump_via_waypoint_set() {
    let (mut nav, registry) = setup();
    let waypoints = WaypointSet::default_tour();

    let intent = waypoints.jump_intent("west-wall").unwrap();
    assert!(nav.submit(intent, &registry, 0.0));
    assert_eq!(nav.transform().position, Vec3::new(-4.0, 2.5, 0.0));
    assert!(nav.transform().forward().x < -0.99);
    assert!(nav.drain_events().contains(&NavEvent::PresetJumped));
}

#[test]
fn test_preset_jump_rejected_mid_zoom() {
    let (mut nav, registry) = setup();
    let waypoints = WaypointSet::default_tour();
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "coral-passion".to_string(),
        },
        &registry,
        0.0,
    );
    nav.update(500.0);
    let pose = *nav.transform();
    assert!(!nav.submit(waypoints.jump_intent("entrance").unwrap(), &registry, 500.0));
    assert_eq!(*nav.transform(), pose);
    assert_eq!(nav.mode(), NavigationMode::ZoomingIn);
}

#[test]
fn test_preset_jump_from_zoomed_in() {
    let (mut nav, registry) = setup();
    let waypoints = WaypointSet::default_tour();
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "coral-passion".to_string(),
        },
        &registry,
        0.0,
    );
    run(&mut nav, 0.0, 1200.0);
    nav.drain_events();

    assert!(nav.submit(waypoints.jump_intent("entrance").unwrap(), &registry, 1500.0));
    assert_eq!(nav.mode(), NavigationMode::Idle);
    let events = nav.drain_events();
    assert!(events.contains(&NavEvent::NarrationCancelled));
    assert!(events.contains(&NavEvent::PresetJumped));
    // The abandoned zoom cannot be returned to
    assert!(!nav.submit(MotionIntent::ZoomOut, &registry, 1600.0));
}

// ============================================================================
// Interactive Table Tests
// ============================================================================

#[test]
fn test_table_overlay_lifecycle() {
    let (mut nav, registry) = setup();
    assert!(nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "photo-table".to_string(),
        },
        &registry,
        0.0,
    ));
    assert_eq!(nav.mode(), NavigationMode::Interactive);
    // No flight, no popup schedule
    assert!(!nav.status().is_animating);
    run(&mut nav, 0.0, 5000.0);
    let events = nav.drain_events();
    assert!(events.contains(&NavEvent::InteractiveOpened {
        exhibit_id: "photo-table".to_string()
    }));
    assert!(!events.iter().any(|e| matches!(e, NavEvent::ExhibitDisplayed { .. })));

    assert!(nav.close_interactive());
    assert_eq!(nav.mode(), NavigationMode::Idle);
    // Camera never moved
    assert_eq!(nav.transform().position, Vec3::new(0.0, 2.5, 0.0));
}

#[test]
fn test_interactive_suspends_everything() {
    let (mut nav, registry) = setup();
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "photo-table".to_string(),
        },
        &registry,
        0.0,
    );
    let waypoints = WaypointSet::default_tour();
    assert!(!nav.submit(
        MotionIntent::MoveTo {
            point: Vec3::new(1.0, 0.0, 1.0),
        },
        &registry,
        100.0,
    ));
    assert!(!nav.submit(waypoints.jump_intent("entrance").unwrap(), &registry, 100.0));
    assert!(!nav.submit(MotionIntent::ZoomOut, &registry, 100.0));
    assert_eq!(nav.mode(), NavigationMode::Interactive);
}

// ============================================================================
// Full Tour Scenario
// ============================================================================

#[test]
fn test_full_tour() {
    let (mut nav, registry) = setup();
    let bounds = FloorBounds::default();

    // Walk into the room
    for i in 0..30 {
        nav.submit(
            MotionIntent::Locomote {
                axis: LocomoteAxis::Forward,
                amount: 0.05,
            },
            &registry,
            i as f64 * 16.0,
        );
        nav.update(i as f64 * 16.0 + 8.0);
    }
    assert!(bounds.contains(nav.transform().position));

    // Click-to-move toward the west wall
    nav.submit(
        MotionIntent::MoveTo {
            point: Vec3::new(-4.0, 0.0, 0.0),
        },
        &registry,
        1000.0,
    );
    run(&mut nav, 1000.0, 2000.0);

    // Zoom in on a painting, wait for the popup, zoom out
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "sage-wisdom".to_string(),
        },
        &registry,
        2000.0,
    );
    run(&mut nav, 2000.0, 4500.0);
    nav.submit(MotionIntent::ZoomOut, &registry, 4500.0);
    run(&mut nav, 4500.0, 5700.0);
    assert_eq!(nav.transform().position, Vec3::new(-4.0, 2.5, 0.0));

    // Visit the table
    nav.submit(
        MotionIntent::ZoomTo {
            exhibit_id: "photo-table".to_string(),
        },
        &registry,
        6000.0,
    );
    nav.close_interactive();

    let events = nav.drain_events();
    assert!(events.contains(&NavEvent::MoveCompleted));
    assert!(events.iter().any(|e| matches!(
        e,
        NavEvent::ZoomInCompleted { exhibit_id } if exhibit_id == "sage-wisdom"
    )));
    assert!(events.iter().any(|e| matches!(
        e,
        NavEvent::ExhibitDisplayed { exhibit_id, .. } if exhibit_id == "sage-wisdom"
    )));
    assert!(events.contains(&NavEvent::ZoomOutCompleted));
    assert!(events.contains(&NavEvent::InteractiveClosed));

    // The camera never left the walkable rectangle
    assert!(bounds.contains(nav.transform().position));
    assert_eq!(nav.mode(), NavigationMode::Idle);
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_custom_durations_respected() {
    let config = NavigationConfig {
        move_duration_ms: 500.0,
        ..Default::default()
    };
    let mut nav = Navigator::new(FloorBounds::default(), config);
    let registry = ExhibitRegistry::default_museum();

    nav.submit(
        MotionIntent::MoveTo {
            point: Vec3::new(2.0, 0.0, 2.0),
        },
        &registry,
        0.0,
    );
    nav.update(499.0);
    assert_eq!(nav.mode(), NavigationMode::Moving);
    nav.update(500.0);
    assert_eq!(nav.mode(), NavigationMode::Idle);
}
