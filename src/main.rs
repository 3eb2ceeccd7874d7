use glade::Viewer;

fn main() {
    let mut args = std::env::args().skip(1);

    let mut viewer = Viewer::new();
    if let Some(model) = args.next() {
        viewer = viewer.with_model(model);
    }
    if let Some(texture) = args.next() {
        viewer = viewer.with_texture(texture);
    }

    if let Err(e) = viewer.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
