fn main() {
    jobboard_frontend::run();
}
