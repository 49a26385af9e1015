fn main() {
    plugin_version::app::startup::startup();
}
