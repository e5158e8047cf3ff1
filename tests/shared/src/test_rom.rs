/*
 * Copyright (C) 2022-2025 by Christian Fischer
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

//! Downloads and caches the test ROM archives used by the test suite.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;


/// The download location of the test ROM archives.
const TEST_ROM_BASE_URL : &str = "https://gbdev.gg8.se/files/roms/blargg-gb-tests/";


/// Get the local directory where test ROMs are cached.
/// May be overridden via the `TEST_ROM_CACHE` environment variable.
pub fn get_cache_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TEST_ROM_CACHE") {
        return PathBuf::from(dir);
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("res")
}


/// Downloads an archive and unpacks it into the cache directory.
fn download_archive(archive: &str) -> Result<(), String> {
    let url = format!("{}{}.zip", TEST_ROM_BASE_URL, archive);

    let response = reqwest::blocking::get(&url)
        .map_err(|e| format!("failed to download {}: {}", url, e))?;

    let bytes = response.bytes()
        .map_err(|e| format!("failed to download {}: {}", url, e))?;

    let cache_dir = get_cache_dir();
    fs::create_dir_all(&cache_dir)
        .map_err(|e| format!("failed to create {}: {}", cache_dir.display(), e))?;

    zip_extract::extract(Cursor::new(bytes), &cache_dir, false)
        .map_err(|e| format!("failed to unpack {}: {}", url, e))?;

    Ok(())
}


/// Get the content of a single test ROM, identified by its path within
/// the archive, like `cpu_instrs/individual/01-special.gb`.
/// The ROM is taken from the local cache when present, otherwise its
/// archive is downloaded first. Returns `None` when the ROM cannot be
/// obtained, so tests may skip gracefully in offline environments.
pub fn obtain(rom_path: &str) -> Option<Vec<u8>> {
    let file_path = get_cache_dir().join(rom_path);

    if !file_path.is_file() {
        let archive = rom_path.split('/').next()?;

        if let Err(message) = download_archive(archive) {
            eprintln!("{}", message);
            return None;
        }
    }

    match fs::read(&file_path) {
        Ok(bytes) => Some(bytes),

        Err(e) => {
            eprintln!("failed to read {}: {}", file_path.display(), e);
            None
        }
    }
}
