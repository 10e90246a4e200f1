fn main() -> std::process::ExitCode {
    tikgrab_lib::run()
}
