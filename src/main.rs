use juris_chat::app::App;
use juris_chat::monitoring;

fn main() {
    monitoring::init();
    dioxus::launch(App);
}
