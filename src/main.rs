#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Mechanism;
#[allow(non_snake_case)]
pub mod Symbolic;
#[allow(non_snake_case)]
pub mod Utils;

use Examples::symbolic_examples::symbolic_examples;
use simplelog::{Config, LevelFilter, SimpleLogger};

pub fn main() {
    SimpleLogger::init(LevelFilter::Info, Config::default()).unwrap();
    let task: usize = 2;
    symbolic_examples(task);
}
