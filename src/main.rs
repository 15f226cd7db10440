use yew_puzzle_rush::components::App;

fn main() {
    yew_puzzle_rush::util::init_logging(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
