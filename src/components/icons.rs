//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

mod lucide {
    pub use icondata::{
        LuDownload as Download, LuFile as File, LuFolder as Folder, LuSearch as Search,
    };
}

mod bootstrap {
    pub use icondata::{
        BsDownload as Download, BsFileEarmark as File, BsFolderFill as Folder, BsSearch as Search,
    };
}

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(SEARCH, Search);
themed_icon!(DOWNLOAD, Download);
