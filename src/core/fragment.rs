/// Marker string the patch stage searches for.
pub const BODY_CLOSE: &str = "</body>";

/// Hosted twemoji script reference injected into the document.
pub const DEFAULT_SCRIPT_URL: &str = "https://twemoji.maxcdn.com/2/twemoji.min.js?2.6";

pub const DEFAULT_IMAGE_FOLDER: &str = "svg";
pub const DEFAULT_IMAGE_EXT: &str = ".svg";

/// Renders the replacement text for one body-close marker: the marker itself,
/// followed by the emoji sizing style block, the hosted script tag, and the
/// inline `twemoji.parse` call. The fragment starts with the marker, so the
/// injected markup lands immediately after the closing body tag.
pub fn injection_fragment(marker: &str, script_url: &str, folder: &str, ext: &str) -> String {
    format!(
        r#"{marker}
<style>
    img.emoji {{
        height: 1em;
        width: 1em;
        margin: 0 .05em 0 .1em;
        vertical-align: -0.1em;
     }}

</style>
<script src="{script_url}"></script>
  <script>
    twemoji.parse(document.getElementsByTagName('body')[0], {{
        folder: '{folder}',
        ext: '{ext}'
    }});
  </script>"#
    )
}
