//! Terminal Session
//!
//! This example drives the prompt machine through a scripted host.
//!
//! Key concepts:
//! - Host trait as the effect executor
//! - Focus tracking through pointer signals
//! - Raw host events validated at the boundary
//! - Text rendering of snapshots after each transition
//!
//! Run with: RUST_LOG=termprompt=debug cargo run --example terminal_session

use termprompt::activity::PointerKind;
use termprompt::config::TerminalConfig;
use termprompt::render::{Snapshot, TextRenderer};
use termprompt::{Host, PromptMachineBuilder, RawEvent, Session, StaticCommands};
use tracing_subscriber::EnvFilter;

/// Screen position of a pointer signal.
type Point = (i32, i32);

/// Axis-aligned widget rectangle.
#[derive(Clone)]
struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl termprompt::activity::Bounds<Point> for Rect {
    fn contains(&self, &(px, py): &Point) -> bool {
        (self.x..self.x + self.width).contains(&px) && (self.y..self.y + self.height).contains(&py)
    }
}

struct ConsoleHost {
    renderer: TextRenderer,
    input: String,
}

impl Host for ConsoleHost {
    type Target = Point;
    type Root = Rect;

    fn root(&self) -> Option<Rect> {
        Some(Rect {
            x: 0,
            y: 0,
            width: 700,
            height: 400,
        })
    }

    fn set_input_focused(&mut self) {
        println!("  [host] input focused");
    }

    fn clear_command_input(&mut self) {
        self.input.clear();
        println!("  [host] input cleared");
    }

    fn render(&mut self, snapshot: &Snapshot) {
        println!("--- {} ---", snapshot.path());
        for line in self.renderer.render(snapshot) {
            println!("{line}");
        }
        println!();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Terminal Session ===\n");

    let commands = StaticCommands::from_json(
        r#"{
            "ls": ["Applications", "Desktop", "Documents"],
            "pwd": "/root",
            "whoami": "root"
        }"#,
    )
    .expect("command table is valid JSON");

    let config = TerminalConfig::default();
    let machine = PromptMachineBuilder::new()
        .resolver(commands)
        .config(&config)
        .build()
        .expect("machine configuration is valid");

    let mut session = Session::new(
        machine,
        ConsoleHost {
            renderer: TextRenderer::new(config),
            input: String::new(),
        },
    );

    session.boot();
    session.pointer_down(PointerKind::MouseDown, &(120, 80));

    for command in ["ls", "pwd", "frobnicate"] {
        session.host_mut().input = command.to_string();
        session.input_changed(command);
        session.key_down("Enter");
    }

    println!("Sending a malformed raw event:");
    if let Err(rejected) = session.dispatch_raw(&RawEvent::new("KEY_DOWN").with_text("Enter")) {
        println!("  {rejected}\n");
    }

    session.input_changed("clear");
    session.key_down("Enter");

    session.pointer_down(PointerKind::TouchStart, &(900, 10));
    session.shutdown();

    println!("State path: {:?}", session.machine().history().get_path());
    println!("\n=== Example Complete ===");
}
