pub mod canvas;
pub mod grid;
pub mod metrics;
pub mod raster;
pub mod report;

/// Escape text for inclusion in SVG markup.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
