#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rosterboard::db::initialize::{init_db, seed_pages};
use rosterboard::db::pool::DbPool;
use rosterboard::models::{Category, Item};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rb() -> Command {
    cargo_bin_cmd!("rosterboard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rosterboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty output directory inside the system temp dir
pub fn temp_out_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rosterboard_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create output dir");
    path
}

/// Initialize a DB through the CLI (schema + seeded pages)
pub fn init_cli_db(db_path: &str) {
    rb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a DB through the library and return an open pool
pub fn seeded_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("migrate");
    seed_pages(&pool.conn).expect("seed");
    pool
}

/// In-memory catalog item
pub fn item(token: &str, a: Option<Category>, b: Option<Category>) -> Item {
    let page = token
        .split_once('-')
        .and_then(|(p, _)| p.parse().ok())
        .unwrap_or(1);
    Item {
        id: 0,
        token: token.to_string(),
        page,
        slot_a: a,
        slot_b: b,
        visible: true,
    }
}

pub fn hidden(mut it: Item) -> Item {
    it.visible = false;
    it
}

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Width and height from the IHDR chunk of a PNG file
pub fn png_size(bytes: &[u8]) -> (u32, u32) {
    let w = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let h = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (w, h)
}

/// Pixels darker than mid grey inside rows `top..bottom` of a decoded RGBA PNG
pub fn dark_pixels(bytes: &[u8], top: u32, bottom: u32) -> usize {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().expect("png header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("png frame");

    let mut dark = 0;
    for y in top..bottom.min(info.height) {
        let row = &buf[y as usize * info.line_size..][..info.line_size];
        for px in row.chunks_exact(4) {
            if px[0] < 90 && px[1] < 90 && px[2] < 90 {
                dark += 1;
            }
        }
    }
    dark
}
