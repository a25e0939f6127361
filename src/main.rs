use std::env;
use std::process::ExitCode;

use segmap::script::segmentmapmanager::SegmentMapManager;
use segmap::segment::segmentmap::IntSegmentMap;

/// Mutates a map and prints the canonical form after each step.
fn demo() {
    let mut segments = IntSegmentMap::new();
    println!("{}", segments);
    segments.add(10, 30, 1);
    println!("{}", segments);
    segments.add(20, 40, 1);
    println!("{}", segments);
    segments.add(10, 40, -1);
    println!("{}", segments);
    segments.add(10, 40, -1);
    println!("{}", segments);
    segments.set(10, 40, 1);
    println!("{}", segments);
    segments.set(0, 100, 0);
    println!("{}", segments);
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        demo();
        return ExitCode::SUCCESS;
    }
    let manager = SegmentMapManager::new();
    match manager.from_reader(&args[1]) {
        Ok(outputs) => {
            for line in outputs {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
