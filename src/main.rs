// What you SEE:
// • The line art (or a blank page) fills the window.
// • 1-9 pick a palette color. F arms the bucket; the next left click fills
//   the region under the cursor and disarms it.
// • +/- zoom between 50% and 300%. S saves a PNG. ESC quits.
//
// `coloring-canvas fill ...` does the same fill headless, no window.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use coloring_canvas::cli::{CliArgs, Command, SeedArg};
use coloring_canvas::config::Config;
use coloring_canvas::draw::{draw_cell_marker, Drawer};
use coloring_canvas::io::{export_png, fill_image_file, load_line_art};
use coloring_canvas::session::Session;
use coloring_canvas::{Error, FrameBuffer};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), Error> {
    let config = Config::load(args.config.as_deref())?;
    match args.command {
        None => interactive(None, config),
        Some(Command::Open { image }) => interactive(image.as_deref(), config),
        Some(Command::Fill { input, output, color, seeds }) => {
            let seeds: Vec<_> = seeds.into_iter().map(|SeedArg(at)| at).collect();
            fill_image_file(&input, &output, color, &seeds).map(|_| ())
        }
    }
}

fn interactive(image: Option<&Path>, config: Config) -> Result<(), Error> {
    let mut session = match image {
        Some(path) => Session::new(load_line_art(path)?, config),
        None => Session::blank(config),
    };

    let (w, h) = (session.canvas().width().max(1), session.canvas().height().max(1));
    let mut drawer = Drawer::new(&session.title(), w, h)?;
    let mut screen = FrameBuffer::new(w, h);
    let mut title = session.title();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs */
        if let Some(slot) = drawer.palette_key() {
            session.select_color(slot);
        }
        if drawer.bucket_pressed() {
            session.arm_bucket();
        }
        if drawer.zoom_in_pressed() {
            session.zoom_in();
        }
        if drawer.zoom_out_pressed() {
            session.zoom_out();
        }
        if drawer.left_clicked()
            && let Some((mx, my)) = drawer.mouse_pos()
        {
            session.click(mx, my);
        }
        if drawer.save_pressed() {
            let path = session.config().export_path.clone();
            // A failed save should not end the session.
            if let Err(e) = export_png(session.canvas(), &path) {
                error!("{e}");
            }
        }

        /* 2) Draw: zoomed canvas, then the bucket target marker on top */
        let (sw, sh) = drawer.size();
        session.render(&mut screen, sw.max(1), sh.max(1));
        if session.bucket_armed()
            && let Some((mx, my)) = drawer.mouse_pos()
        {
            let cell = session.viewport().screen_to_canvas(mx, my);
            draw_cell_marker(&mut screen, session.viewport(), cell, 8, 0x00_FF_CC_33);
        }

        let next = session.title();
        if next != title {
            drawer.set_title(&next);
            title = next;
        }

        /* 3) Present */
        drawer.present(&screen)?;
    }

    info!("Window closed");
    Ok(())
}
