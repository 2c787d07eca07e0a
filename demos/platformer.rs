use quarter::glam::Vec2;
use quarter::*;
use tracing_subscriber::EnvFilter;

const HERO: &str = r#"{
    "version": "1",
    "sheet": "hero.png",
    "anims": {
        "idle":    { "frames": 1, "cycle": "circular", "duration": 1.0, "y_offset": 0,  "width": 16, "height": 16 },
        "running": { "frames": 4, "cycle": "circular", "duration": 0.4, "y_offset": 16, "width": 16, "height": 16 }
    },
    "bounds": {
        "idle":    { "shapes": [ { "type": "box", "values": { "min": {"x": 0, "y": 0}, "max": {"x": 12, "y": 16} } } ] },
        "running": { "shapes": [
            { "type": "box", "values": { "min": {"x": 0, "y": 0}, "max": {"x": 14, "y": 16} } },
            { "type": "box", "values": { "min": {"x": 0, "y": 0}, "max": {"x": 14, "y": 15} } },
            { "type": "box", "values": { "min": {"x": 0, "y": 0}, "max": {"x": 14, "y": 16} } },
            { "type": "box", "values": { "min": {"x": 0, "y": 0}, "max": {"x": 14, "y": 15} } }
        ] }
    }
}"#;

const LEVELS: &str = r#"{
    "version": "1",
    "levels": [{
        "name": "yard",
        "limits": { "min": {"x": 0, "y": 0}, "max": {"x": 256, "y": 144} },
        "layers": [{
            "name": "ground",
            "grid": {
                "assets": { "path": "tiles.png", "quantity": 2, "offset": {"x": 0, "y": 0}, "width": 16, "height": 16 },
                "tiles": [
                    { "asset": 0, "x": 0, "y": 0, "bounded": true },
                    { "asset": 0, "x": 1, "y": 0, "bounded": true },
                    { "asset": 1, "x": 2, "y": 0, "bounded": true },
                    { "asset": 0, "x": 3, "y": 0, "bounded": true },
                    { "asset": 0, "x": 4, "y": 0, "bounded": true },
                    { "asset": 0, "x": 5, "y": 0, "bounded": true },
                    { "asset": 1, "x": 5, "y": 1, "bounded": true }
                ]
            },
            "bounds": [
                { "type": "box", "values": { "min": {"x": -16, "y": 0}, "max": {"x": 0, "y": 144} } }
            ]
        }]
    }]
}"#;

/// Prints draw calls instead of rendering them.
struct Console;

impl SpriteTarget for Console {
    fn draw_frame(&mut self, sheet: &str, frame: Rect, position: Vec2, flip_x: bool) {
        println!(
            "  sprite {sheet} [{:.0},{:.0}] at ({:.1},{:.1}){}",
            frame.left(),
            frame.bottom(),
            position.x,
            position.y,
            if flip_x { " flipped" } else { "" }
        );
    }

    fn draw_image(&mut self, path: &str, position: Vec2) {
        println!("  image {path} at ({:.1},{:.1})", position.x, position.y);
    }
}

impl DebugDraw for Console {
    fn rect(&mut self, rect: Rect, _color: Rgba) {
        println!(
            "  box ({:.1},{:.1})-({:.1},{:.1})",
            rect.min.x, rect.min.y, rect.max.x, rect.max.y
        );
    }

    fn circle(&mut self, center: Vec2, radius: f32, _color: Rgba) {
        println!("  circle ({:.1},{:.1}) r={radius:.1}", center.x, center.y);
    }

    fn fill_rect(&mut self, _rect: Rect, color: Rgba) {
        println!("  fade alpha={:.2}", color.a);
    }
}

struct Game {
    hero: Character,
    level: Level,
    fade: Fade,
    console: Console,
    ticks: u32,
}

fn play(game: &mut Game, dt: f32) -> anyhow::Result<String> {
    game.ticks += 1;
    let hero = &mut game.hero;

    if game.ticks < 40 {
        hero.accelerate(Axis::X, Direction::RIGHT, dt);
    } else {
        hero.decelerate(Axis::X, dt);
    }

    let sol = hero.step(dt, game.level.bounds())?;
    let anim = if hero.kinematics().velocity(Axis::X) != 0.0 { "running" } else { "idle" };
    hero.animation_mut().set_current(anim)?;

    if game.ticks % 10 == 0 {
        println!(
            "tick {:>3}: pos=({:.2},{:.2}) v=({:.2},{:.2}) blocked={:?}",
            game.ticks,
            hero.position().x,
            hero.position().y,
            hero.kinematics().velocity(Axis::X),
            hero.kinematics().velocity(Axis::Y),
            sol.axis
        );
        hero.draw(&mut game.console, dt);
        hero.debug_draw(&mut game.console, Rgba::new(1.0, 0.0, 0.0, 1.0))?;
    }

    Ok(if game.ticks >= 80 { "outro" } else { "play" }.to_owned())
}

fn outro(game: &mut Game, dt: f32) -> anyhow::Result<String> {
    let done = game.fade.draw(&mut game.console, game.level.limits, dt);
    Ok(if done { "done" } else { "outro" }.to_owned())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut hero = Character::from_reader(HERO.as_bytes(), Vec2::new(24.0, 40.0), KinematicsParams::default())?;
    hero.animation_mut().set_current("idle")?;
    let level = Level::load_all_str(LEVELS)?.remove(0);

    println!("Level {:?}:", level.name);
    level.draw(&mut Console);

    let mut game = Game {
        hero,
        level,
        fade: Fade::new(Rgba::from_u8(0, 0, 0, 255), 0.1),
        console: Console,
        ticks: 0,
    };

    let mut director = Director::new("play");
    director
        .register("play", play)
        .register("outro", outro)
        .register("done", |_: &mut Game, _: f32| -> anyhow::Result<String> { Ok("done".into()) });

    let dt = 1.0 / 60.0;
    while director.current() != "done" {
        director.tick(&mut game, dt)?;
    }
    println!("Finished after {} ticks", game.ticks);
    Ok(())
}
