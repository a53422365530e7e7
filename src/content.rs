//! Built-in page content for Vibe Gen.
//!
//! Used whenever the configuration does not supply its own sidebar.

use crate::sidebar::SidebarBlock;

pub const TITLE: &str = "Vibe Gen";
pub const ICON: &str = "✌️";
pub const SIDEBAR_IMAGE: &str = "https://i.imgur.com/7j5aq4l.png";
pub const IFRAME_URL: &str = "https://vibegen.elpeef.com/";

const ABOUT_HEADER: &str = "📘 **About**";

const ABOUT: &str = r#"**Vibe Gen** turns raw blockchain data into understandable, shareable, and engaging digital identities.

---

#### 🔮 Vision Statement

We believe that every wallet tells a story, and we're here to visualize it in the most magical way possible.

---

### 🧩 Apps Showcase

Lihat disini untuk semua tools yang kami kembangkan:
[ELPEEF](https://showcase.elpeef.com/)

---

#### 🙌 Dukungan & kontributor

- ⭐ **Star / Fork**: [GitHub repo](https://github.com/mrbrightsides/VibeGen)
- Built with 💙 by [Khudri](https://s.id/khudri)
- Dukung pengembangan proyek ini melalui:
  [💖 GitHub Sponsors](https://github.com/sponsors/mrbrightsides) •
  [☕ Ko-fi](https://ko-fi.com/khudri) •
  [💵 PayPal](https://www.paypal.com/paypalme/akhmadkhudri) •
  [🍵 Trakteer](https://trakteer.id/akhmad_khudri)

Versi UI: v1.0 • Rust • Theme Dark
"#;

/// The default sidebar: branding image, then the about header and body.
pub fn sidebar_blocks(image_src: &str) -> Vec<SidebarBlock> {
    vec![
        SidebarBlock::image(image_src),
        SidebarBlock::markdown(ABOUT_HEADER),
        SidebarBlock::markdown(ABOUT),
    ]
}
