use glam::Vec3;

use pendula_engine::{PendulumSettings, SceneCore};

#[test]
fn scene_smoke_builds_reference_setup_from_json() {
    let json = r#"{
        "ballRadius": 0.04,
        "ballMass": 2.0,
        "stringLength": 0.3,
        "attachmentSize": [2.0, 0.5, 2.0],
        "pendulumCount": 3,
        "pendulumSpeed": 0.5
    }"#;

    let settings = PendulumSettings::from_json(json).expect("reference settings should parse");
    assert_eq!(settings.impulse_power(), Vec3::new(-32.0, 0.0, 0.0));

    let mut core = SceneCore::new();
    let root = core.build_scene(settings).expect("scene should assemble");

    assert_eq!(core.pendulum_count(), 3);
    assert_eq!(core.joint_count(), 3);

    // One simulation root holds the whole constraint graph.
    assert_eq!(core.graph().simulation_roots(), vec![root]);
    let state = core.graph().node(root).simulation.as_ref().unwrap();
    assert_eq!(state.position_iterations, 25);
    assert_eq!(state.velocity_iterations, 25);

    // Layout: offsets {-0.08, 0, 0.08}, root raised to y = 0.15.
    let offsets: Vec<f32> = (0..3)
        .map(|i| {
            core.graph()
                .node(core.pendulum(i).unwrap().pendulum)
                .translation
                .x
        })
        .collect();
    assert!((offsets[0] + 0.08).abs() < 1e-6);
    assert!(offsets[1].abs() < 1e-6);
    assert!((offsets[2] - 0.08).abs() < 1e-6);
    assert!((core.graph().node(root).translation.y - 0.15).abs() < 1e-6);

    // Speed dial: forward scale on the root, inverse on the group.
    let group = core.group().unwrap();
    assert_eq!(core.graph().node(root).scale, Vec3::splat(0.5));
    assert_eq!(core.graph().node(group).scale, Vec3::splat(2.0));

    // Tapping a ball queues exactly one impulse for the host solver.
    core.apply_impulse(1).expect("ball is a dynamic body");
    assert_eq!(core.pending_impulses().len(), 1);
    assert_eq!(
        core.pending_impulses()[0].linear_impulse,
        Vec3::new(-32.0, 0.0, 0.0)
    );
}
