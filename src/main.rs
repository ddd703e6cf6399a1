mod app;
mod cli;
mod codec;
mod constants;
mod gesture;
mod grid;
mod session;
mod storage;

fn main() {
    cli::run();
}
