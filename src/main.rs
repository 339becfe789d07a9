use clap::Parser;
use hecs::World;

use strider::app::GameApp;
use strider::engine::window::GameWindow;
use strider::scene::level::load_demo_level;

#[derive(Parser)]
#[command(name = "strider", about = "Side-scrolling character demo")]
struct Args {
    /// Run the simulation without a window
    #[arg(long)]
    headless: bool,

    /// How long a headless run lasts, in seconds
    #[arg(long, default_value_t = 10.0)]
    seconds: f32,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();

    let mut world = World::new();
    let (clips, player_entity) = load_demo_level(&mut world).expect("Failed to build demo level");
    let mut app = GameApp::new(world, clips, player_entity);

    if args.headless {
        app.run_headless(args.seconds);
        return;
    }

    let sdl = sdl2::init().expect("Failed to init SDL2");
    let mut window = GameWindow::new(&sdl, "Strider", 1280, 720);
    app.run(&sdl, &mut window);
}
