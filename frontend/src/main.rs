fn main() {
    reflex_landing::run();
}
