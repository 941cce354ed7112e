//! Planet demo
//!
//! Procedurally generates a UV sphere and renders it with a toggleable
//! shading mode, toggleable wireframe, and toggleable axial rotation.

use gl_engine::foundation::math::{Mat4, Mat4Ext, Vec3};
use gl_engine::foundation::time::Timer;
use gl_engine::render::{Camera, Mesh, MeshBuffers, Renderer, ShaderProgram, Window};
use glfw::{Action, Key, WindowEvent};

const WINDOW_TITLE: &str = "Planet in Space";
const WINDOW_WIDTH: u32 = 1024;
const WINDOW_HEIGHT: u32 = 576;

const VERTEX_SHADER_PATH: &str = "resources/shaders/planet.vert";
const FRAGMENT_SHADER_PATH: &str = "resources/shaders/planet.frag";

const CLEAR_COLOR: [f32; 3] = [39.0 / 255.0, 40.0 / 255.0, 34.0 / 255.0];

const SPHERE_RADIUS: f32 = 50.0;
const LATITUDE_SEGMENTS: u32 = 36;
const LONGITUDE_SEGMENTS: u32 = 72;

/// Rotation rate about the polar axis in radians per second
const SPIN_RATE: f32 = 0.5;
const SHADING_MODE_COUNT: u32 = 3;

/// Per-frame mutable demo state, written only by the key handler
struct PlanetState {
    wireframe: bool,
    shading_mode: u32,
    rotating: bool,
    spin_angle: f32,
}

impl Default for PlanetState {
    fn default() -> Self {
        Self {
            wireframe: false,
            shading_mode: 0,
            rotating: true,
            spin_angle: 0.0,
        }
    }
}

struct PlanetApp {
    window: Window,
    renderer: Renderer,
    program: ShaderProgram,
    buffers: MeshBuffers,
    camera: Camera,
    timer: Timer,
    state: PlanetState,
}

impl PlanetApp {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mut window = Window::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;
        let renderer = Renderer::new(&mut window)?;
        renderer.set_clear_color(CLEAR_COLOR[0], CLEAR_COLOR[1], CLEAR_COLOR[2]);

        let program =
            ShaderProgram::from_files(renderer.gl(), VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)?;

        let sphere = Mesh::uv_sphere(SPHERE_RADIUS, LATITUDE_SEGMENTS, LONGITUDE_SEGMENTS);
        log::info!(
            "Generated sphere with {} vertices and {} triangles",
            sphere.vertices.len(),
            sphere.triangle_count()
        );
        let buffers = MeshBuffers::upload(renderer.gl(), &sphere, &program)?;

        let camera = Camera::perspective(
            Vec3::new(0.0, 50.0, 200.0),
            45.0,
            WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
            1.0,
            1000.0,
        );

        Ok(Self {
            window,
            renderer,
            program,
            buffers,
            camera,
            timer: Timer::new(),
            state: PlanetState::default(),
        })
    }

    fn run(&mut self) {
        while !self.window.should_close() {
            self.window.poll_events();

            let events: Vec<WindowEvent> =
                self.window.flush_events().map(|(_, event)| event).collect();
            for event in events {
                self.handle_event(event);
            }

            self.timer.update();
            self.update();
            self.render();
        }
    }

    fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Key(Key::Escape | Key::Q, _, Action::Press, _) => {
                self.window.set_should_close(true);
            }
            WindowEvent::Key(Key::H | Key::F1, _, Action::Press, _) => {
                print_help();
            }
            WindowEvent::Key(Key::W, _, Action::Press, _) => {
                self.state.wireframe = !self.state.wireframe;
                self.renderer.set_wireframe(self.state.wireframe);
                log::info!(
                    "Wireframe {}",
                    if self.state.wireframe { "on" } else { "off" }
                );
            }
            WindowEvent::Key(Key::D, _, Action::Press, _) => {
                self.state.shading_mode = (self.state.shading_mode + 1) % SHADING_MODE_COUNT;
                log::info!("Shading mode {}", self.state.shading_mode);
            }
            WindowEvent::Key(Key::R, _, Action::Press, _) => {
                self.state.rotating = !self.state.rotating;
                log::info!(
                    "Rotation {}",
                    if self.state.rotating { "on" } else { "off" }
                );
            }
            WindowEvent::FramebufferSize(width, height) => {
                if width > 0 && height > 0 {
                    self.renderer.set_viewport(width, height);
                    self.camera.set_aspect_ratio(width as f32 / height as f32);
                }
            }
            _ => {}
        }
    }

    fn update(&mut self) {
        // Accumulate only while enabled so toggling pauses in place
        if self.state.rotating {
            self.state.spin_angle += SPIN_RATE * self.timer.delta_time();
        }
    }

    fn render(&mut self) {
        self.renderer.begin_frame();
        self.program.bind();

        self.program.set_mat4("view_matrix", &self.camera.get_view_matrix());
        self.program
            .set_mat4("projection_matrix", &self.camera.get_projection_matrix());

        // The sphere's poles sit on +Z/-Z, so spin about the polar axis
        let model = Mat4::rotation_z(self.state.spin_angle);
        self.program.set_mat4("model_matrix", &model);

        self.program.set_u32("color_mode", self.state.shading_mode);
        self.program.set_f32("time", self.timer.total_time());

        self.renderer.draw(&self.buffers);
        self.renderer.end_frame(&mut self.window);
    }
}

fn print_help() {
    println!();
    println!("[Help]");
    println!("- Press ESC or 'q' to terminate the program");
    println!("- Press F1 or 'h' to see help");
    println!("- Press 'w' to toggle wireframe");
    println!("- Press 'd' to cycle the shading mode");
    println!("- Press 'r' to toggle rotation");
    println!();
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    print_help();

    let mut app = match PlanetApp::new() {
        Ok(app) => app,
        Err(e) => {
            log::error!("Initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    app.run();
    log::info!("Planet demo closed");
}
