//! Dragon mesh viewer
//!
//! Loads a triangle mesh from a flat binary vertex/index file pair and
//! renders it with a perspective camera and a slow orbiting rotation.

use gl_engine::assets::MeshDataLoader;
use gl_engine::foundation::math::{Mat4, Mat4Ext, Vec3};
use gl_engine::foundation::time::Timer;
use gl_engine::render::{Camera, MeshBuffers, Renderer, ShaderProgram, Window};
use glfw::{Action, Key, WindowEvent};

const WINDOW_TITLE: &str = "Dragon Viewer";
const WINDOW_WIDTH: u32 = 1024;
const WINDOW_HEIGHT: u32 = 576;

const VERTEX_SHADER_PATH: &str = "resources/shaders/dragon.vert";
const FRAGMENT_SHADER_PATH: &str = "resources/shaders/dragon.frag";
const MESH_VERTEX_PATH: &str = "resources/mesh/dragon.vertex.bin";
const MESH_INDEX_PATH: &str = "resources/mesh/dragon.index.bin";

const CLEAR_COLOR: [f32; 3] = [39.0 / 255.0, 40.0 / 255.0, 34.0 / 255.0];

/// Rotation rate about +Y in radians per second
const SPIN_RATE: f32 = -0.25;
/// Sideways drift of the model; the mesh also moves back by the same amount
const SIDE_DRIFT: f32 = -50.0;

struct DragonApp {
    window: Window,
    renderer: Renderer,
    program: ShaderProgram,
    buffers: MeshBuffers,
    camera: Camera,
    timer: Timer,
}

impl DragonApp {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mut window = Window::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;
        let renderer = Renderer::new(&mut window)?;
        renderer.set_clear_color(CLEAR_COLOR[0], CLEAR_COLOR[1], CLEAR_COLOR[2]);

        let program =
            ShaderProgram::from_files(renderer.gl(), VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)?;

        let mesh = MeshDataLoader::load(MESH_VERTEX_PATH, MESH_INDEX_PATH)?;
        log::info!(
            "Loaded dragon mesh with {} vertices and {} triangles",
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        let buffers = MeshBuffers::upload(renderer.gl(), &mesh, &program)?;

        let camera = Camera::perspective(
            Vec3::new(0.0, 30.0, 300.0),
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
            WindowEvent::FramebufferSize(width, height) => {
                if width > 0 && height > 0 {
                    self.renderer.set_viewport(width, height);
                    self.camera.set_aspect_ratio(width as f32 / height as f32);
                }
            }
            _ => {}
        }
    }

    fn render(&mut self) {
        self.renderer.begin_frame();
        self.program.bind();

        self.program.set_mat4("view_matrix", &self.camera.get_view_matrix());
        self.program
            .set_mat4("projection_matrix", &self.camera.get_projection_matrix());

        // Spin the mesh about +Y through the camera target, then drift it
        // sideways and away from the camera
        let theta = SPIN_RATE * self.timer.total_time();
        let at = self.camera.target;
        let model = Mat4::translation(SIDE_DRIFT, 0.0, -SIDE_DRIFT.abs())
            * Mat4::translation(at.x, at.y, at.z)
            * Mat4::rotation_y(theta)
            * Mat4::translation(-at.x, -at.y, -at.z);
        self.program.set_mat4("model_matrix", &model);

        self.renderer.draw(&self.buffers);
        self.renderer.end_frame(&mut self.window);
    }
}

fn print_help() {
    println!();
    println!("[Help]");
    println!("- Press ESC or 'q' to terminate the program");
    println!("- Press F1 or 'h' to see help");
    println!();
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    print_help();

    let mut app = match DragonApp::new() {
        Ok(app) => app,
        Err(e) => {
            log::error!("Initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    app.run();
    log::info!("Dragon viewer closed");
}
