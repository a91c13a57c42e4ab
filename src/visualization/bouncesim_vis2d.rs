use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::session::{Command, Mode, Session};
use crate::simulation::states::Rgb;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct StatusText;

/// Wall-clock time since the viewer started, for the bail-out timer
#[derive(Resource, Default)]
struct Elapsed(f32);

pub fn run_2d(session: Session) {
    let bounds = session.scenario.bounds;
    let hz = session.scenario.parameters.frame_rate;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "bouncesim".into(),
                resolution: WindowResolution::new(bounds.width as f32, bounds.height as f32),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(session)
        .insert_resource(Time::<Fixed>::from_hz(hz))
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<Elapsed>()
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (input_system, bailout_system, sync_transforms_system, status_text_system))
        .add_systems(FixedUpdate, physics_step_system)
        .run();
}

fn color(c: Rgb) -> Color {
    Color::srgb_u8(c.0, c.1, c.2)
}

fn setup_bodies_system(mut commands: Commands, session: Res<Session>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!(
        "run_2d: starting Bevy 2D viewer with {} bodies at {} Hz",
        session.scenario.system.bodies.len(),
        session.scenario.parameters.frame_rate
    );

    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let bounds = session.scenario.bounds;
    for (i, body) in session.scenario.system.bodies.iter().enumerate() {
        let (x, y) = to_world(body.x.x, body.x.y, bounds.width, bounds.height);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(color(body.color))),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    commands.spawn((
        TextBundle::from_section("", TextStyle { font_size: 16.0, color: Color::WHITE, ..default() })
            .with_style(Style {
                position_type: PositionType::Absolute,
                top: Val::Px(4.0),
                left: Val::Px(4.0),
                ..default()
            }),
        StatusText,
    ));
}

/// Screen pixels (origin top-left, y down) to Bevy world units (origin centre, y up)
fn to_world(x: f64, y: f64, width: f64, height: f64) -> (f32, f32) {
    ((x - width / 2.0) as f32, (height / 2.0 - y) as f32)
}

fn input_system(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<Session>, mut exit: EventWriter<AppExit>) {
    let escape = if session.mode == Mode::Play { Command::Back } else { Command::Quit };
    let bindings = [
        (KeyCode::Enter, Command::Start),
        (KeyCode::Escape, escape),
        (KeyCode::KeyQ, Command::Quit),
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::Equal, Command::Faster),
        (KeyCode::NumpadAdd, Command::Faster),
        (KeyCode::Minus, Command::Slower),
        (KeyCode::NumpadSubtract, Command::Slower),
        (KeyCode::KeyR, Command::Reset),
    ];

    for (key, cmd) in bindings {
        if keys.just_pressed(key) {
            session.apply(cmd);
        }
    }

    if session.is_finished() {
        exit.send(AppExit::Success);
    }
}

fn bailout_system(time: Res<Time>, mut elapsed: ResMut<Elapsed>, mut session: ResMut<Session>) {
    elapsed.0 += time.delta_seconds();
    if session.expired(std::time::Duration::from_secs_f32(elapsed.0)) && !session.is_finished() {
        warn!("bail-out timer expired after {:.1} s", elapsed.0);
        session.apply(Command::Quit);
    }
}

fn physics_step_system(mut session: ResMut<Session>) {
    session.tick();
}

fn sync_transforms_system(session: Res<Session>, mut query: Query<(&BodyIndex, &mut Transform, &mut Visibility)>) {
    let bounds = session.scenario.bounds;
    let visible = if session.mode == Mode::Play { Visibility::Visible } else { Visibility::Hidden };

    for (BodyIndex(i), mut transform, mut vis) in &mut query {
        if let Some(b) = session.scenario.system.bodies.get(*i) {
            let (x, y) = to_world(b.x.x, b.x.y, bounds.width, bounds.height);
            transform.translation.x = x;
            transform.translation.y = y;
        }
        *vis = visible;
    }
}

fn status_text_system(session: Res<Session>, mut query: Query<&mut Text, With<StatusText>>) {
    if !session.is_changed() {
        return;
    }
    let line = match session.mode {
        Mode::Menu => "ENTER start   ESC quit".to_string(),
        Mode::Play => format!(
            "{}x{:.2}   SPACE pause  +/- speed  R reset  ESC back",
            if session.paused { "PAUSED " } else { "" },
            session.speed_scale()
        ),
        Mode::Finished => String::new(),
    };
    for mut text in &mut query {
        text.sections[0].value = line.clone();
    }
}
