//! Text gizmo demo
//!
//! Labels a handful of scene objects while the editor camera orbits them and
//! logs the icon draws a host renderer would receive each frame.
//!
//! Usage: `gizmo_demo [config.toml|config.ron]`

use text_gizmo::foundation::logging;
use text_gizmo::prelude::*;

const FRAMES: usize = 4;
const ORBIT_RADIUS: f32 = 12.0;
const ORBIT_HEIGHT: f32 = 4.0;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("failed to load gizmo settings: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to draw labels: {0}")]
    Gizmo(#[from] TextGizmoError),
}

struct SceneObject {
    name: &'static str,
    position: Vec3,
    color: Color,
}

struct GizmoDemo {
    gizmo: TextGizmo<Camera>,
    objects: Vec<SceneObject>,
    draw_list: IconDrawList,
}

impl GizmoDemo {
    fn new(config: TextGizmoConfig) -> Self {
        let camera = Camera::perspective(
            Vec3::new(0.0, ORBIT_HEIGHT, ORBIT_RADIUS),
            60.0,
            Vec2::new(1280.0, 720.0),
            0.1,
            500.0,
        );

        let objects = vec![
            SceneObject {
                name: "Spawn",
                position: Vec3::new(0.0, 0.0, 0.0),
                color: Color::new(0.2, 1.0, 0.2, 1.0),
            },
            SceneObject {
                name: "Turret #1",
                position: Vec3::new(4.0, 1.0, -2.0),
                color: Color::new(1.0, 0.3, 0.3, 1.0),
            },
            SceneObject {
                name: "Waypoint (a)",
                position: Vec3::new(-3.0, 0.5, 3.0),
                color: Color::new(0.3, 0.6, 1.0, 1.0),
            },
        ];

        Self {
            gizmo: TextGizmo::with_config(config).with_viewport(camera),
            objects,
            draw_list: IconDrawList::new(),
        }
    }

    fn update(&mut self, frame: usize) {
        #[allow(clippy::cast_precision_loss)]
        let angle = frame as f32 * std::f32::consts::FRAC_PI_4;

        if let Some(camera) = self.gizmo.viewport_mut() {
            camera.set_position(Vec3::new(
                ORBIT_RADIUS * angle.sin(),
                ORBIT_HEIGHT,
                ORBIT_RADIUS * angle.cos(),
            ));
        }
    }

    fn draw(&mut self) -> Result<usize, DemoError> {
        let mut drawn = 0;

        for object in &self.objects {
            drawn += self.gizmo.draw_basic_colored(
                &mut self.draw_list,
                &object.position,
                object.name,
                object.color,
            )?;

            let coordinates = format!(
                "x {:.1}\ny {:.1}\nz {:.1}",
                object.position.x, object.position.y, object.position.z
            );
            drawn += self.gizmo.draw_extended_with(
                &mut self.draw_list,
                &object.position,
                &coordinates,
                TextAlignment::RIGHT_TOP,
                object.color,
            )?;
        }

        Ok(drawn)
    }

    fn submit(&mut self, frame: usize) {
        for command in self.draw_list.drain() {
            log::debug!(
                "frame {} icon {} at ({:.3}, {:.3}, {:.3})",
                frame,
                command.icon,
                command.position.x,
                command.position.y,
                command.position.z
            );
        }
    }
}

fn load_config() -> Result<TextGizmoConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => Ok(TextGizmoConfig::load_from_file(&path)?),
        None => {
            log::info!("No settings file given, using defaults");
            Ok(TextGizmoConfig::default())
        }
    }
}

fn main() -> Result<(), DemoError> {
    logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting text gizmo demo");

    let config = load_config()?;
    let mut demo = GizmoDemo::new(config);

    for frame in 0..FRAMES {
        demo.update(frame);
        let drawn = demo.draw()?;
        log::info!("Frame {}: {} glyph icons", frame, drawn);
        demo.submit(frame);
    }

    log::info!("Text gizmo demo finished");
    Ok(())
}
