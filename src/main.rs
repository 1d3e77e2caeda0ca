fn main() {
    cmbuild::app::cli::run();
}
