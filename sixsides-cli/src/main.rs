fn main() {
    sixsides_cli::main();
}
