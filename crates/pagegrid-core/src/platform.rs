//! Widget platform tags and the card registry
//!
//! Every card on a page carries a [`Platform`] tag that selects which widget
//! renders it. The tag set is closed: adding a platform means adding an enum
//! variant, and every dispatch site is an exhaustive match that the compiler
//! keeps honest.
//!
//! The registry side ([`descriptor`]) supplies per-platform defaults (size,
//! required fields, placeholder text) consumed by the add-card operation.

use serde::{Deserialize, Serialize};

use crate::layout::Size;

/// Widget variant tag for a card.
///
/// Social platforms delegate to the [`SocialPlatform`] table; content and
/// product widgets each have their own renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    // Social platforms
    Facebook,
    Instagram,
    Tiktok,
    Youtube,
    Twitter,
    Linkedin,
    Github,
    Twitch,
    Discord,
    Spotify,
    Pinterest,
    Behance,
    Dribbble,
    Medium,
    Dev,
    Stackoverflow,
    // Content widgets
    Custom,
    Code,
    Qr,
    Map,
    Tv,
    Url,
    Image,
    Video,
    // Product widgets
    AmazonProduct,
    MercadolibreProduct,
    GenericProduct,
}

impl Platform {
    /// All platforms, in palette order.
    pub const ALL: [Platform; 27] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Youtube,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Github,
        Platform::Twitch,
        Platform::Discord,
        Platform::Spotify,
        Platform::Pinterest,
        Platform::Behance,
        Platform::Dribbble,
        Platform::Medium,
        Platform::Dev,
        Platform::Stackoverflow,
        Platform::Custom,
        Platform::Code,
        Platform::Qr,
        Platform::Map,
        Platform::Tv,
        Platform::Url,
        Platform::Image,
        Platform::Video,
        Platform::AmazonProduct,
        Platform::MercadolibreProduct,
        Platform::GenericProduct,
    ];

    /// The social sub-tag, when this platform is a social link card.
    pub fn social(&self) -> Option<SocialPlatform> {
        let social = match self {
            Platform::Facebook => SocialPlatform::Facebook,
            Platform::Instagram => SocialPlatform::Instagram,
            Platform::Tiktok => SocialPlatform::Tiktok,
            Platform::Youtube => SocialPlatform::Youtube,
            Platform::Twitter => SocialPlatform::Twitter,
            Platform::Linkedin => SocialPlatform::Linkedin,
            Platform::Github => SocialPlatform::Github,
            Platform::Twitch => SocialPlatform::Twitch,
            Platform::Discord => SocialPlatform::Discord,
            Platform::Spotify => SocialPlatform::Spotify,
            Platform::Pinterest => SocialPlatform::Pinterest,
            Platform::Behance => SocialPlatform::Behance,
            Platform::Dribbble => SocialPlatform::Dribbble,
            Platform::Medium => SocialPlatform::Medium,
            Platform::Dev => SocialPlatform::Dev,
            Platform::Stackoverflow => SocialPlatform::Stackoverflow,
            _ => return None,
        };
        Some(social)
    }

    pub fn is_social(&self) -> bool {
        self.social().is_some()
    }

    pub fn is_product(&self) -> bool {
        matches!(
            self,
            Platform::AmazonProduct | Platform::MercadolibreProduct | Platform::GenericProduct
        )
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Reuse the serde kebab-case tag as the display form
        let tag = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", tag.trim_matches('"'))
    }
}

/// Social link platforms with per-platform branding metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Tiktok,
    Youtube,
    Twitter,
    Linkedin,
    Github,
    Twitch,
    Discord,
    Spotify,
    Pinterest,
    Behance,
    Dribbble,
    Medium,
    Dev,
    Stackoverflow,
}

/// Branding and link metadata for one social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialInfo {
    /// Short icon glyph shown on the block
    pub icon: &'static str,
    /// Brand color as an RGB hex string
    pub color: &'static str,
    /// Call-to-action label on the block's button
    pub button_label: &'static str,
    /// Base profile URL; the card's handle is appended
    pub base_url: &'static str,
}

impl SocialPlatform {
    /// Branding table lookup.
    pub fn info(&self) -> SocialInfo {
        match self {
            SocialPlatform::Facebook => SocialInfo {
                icon: "f",
                color: "#1877f2",
                button_label: "Follow",
                base_url: "https://facebook.com/",
            },
            SocialPlatform::Instagram => SocialInfo {
                icon: "ig",
                color: "#e4405f",
                button_label: "Follow",
                base_url: "https://instagram.com/",
            },
            SocialPlatform::Tiktok => SocialInfo {
                icon: "tt",
                color: "#010101",
                button_label: "Follow",
                base_url: "https://tiktok.com/@",
            },
            SocialPlatform::Youtube => SocialInfo {
                icon: "yt",
                color: "#ff0000",
                button_label: "Subscribe",
                base_url: "https://youtube.com/@",
            },
            SocialPlatform::Twitter => SocialInfo {
                icon: "x",
                color: "#1da1f2",
                button_label: "Follow",
                base_url: "https://twitter.com/",
            },
            SocialPlatform::Linkedin => SocialInfo {
                icon: "in",
                color: "#0a66c2",
                button_label: "Connect",
                base_url: "https://linkedin.com/in/",
            },
            SocialPlatform::Github => SocialInfo {
                icon: "gh",
                color: "#181717",
                button_label: "Follow",
                base_url: "https://github.com/",
            },
            SocialPlatform::Twitch => SocialInfo {
                icon: "tw",
                color: "#9146ff",
                button_label: "Follow",
                base_url: "https://twitch.tv/",
            },
            SocialPlatform::Discord => SocialInfo {
                icon: "dc",
                color: "#5865f2",
                button_label: "Join",
                base_url: "https://discord.gg/",
            },
            SocialPlatform::Spotify => SocialInfo {
                icon: "sp",
                color: "#1db954",
                button_label: "Listen",
                base_url: "https://open.spotify.com/user/",
            },
            SocialPlatform::Pinterest => SocialInfo {
                icon: "pi",
                color: "#bd081c",
                button_label: "Follow",
                base_url: "https://pinterest.com/",
            },
            SocialPlatform::Behance => SocialInfo {
                icon: "be",
                color: "#1769ff",
                button_label: "Follow",
                base_url: "https://behance.net/",
            },
            SocialPlatform::Dribbble => SocialInfo {
                icon: "dr",
                color: "#ea4c89",
                button_label: "Follow",
                base_url: "https://dribbble.com/",
            },
            SocialPlatform::Medium => SocialInfo {
                icon: "md",
                color: "#000000",
                button_label: "Read",
                base_url: "https://medium.com/@",
            },
            SocialPlatform::Dev => SocialInfo {
                icon: "dev",
                color: "#0a0a0a",
                button_label: "Read",
                base_url: "https://dev.to/",
            },
            SocialPlatform::Stackoverflow => SocialInfo {
                icon: "so",
                color: "#f58025",
                button_label: "View",
                base_url: "https://stackoverflow.com/users/",
            },
        }
    }

    /// Derive the outbound profile URL for a handle.
    ///
    /// A leading `@` on the handle is stripped so `@user` and `user` link to
    /// the same profile.
    pub fn profile_url(&self, handle: &str) -> String {
        let handle = handle.trim();
        let handle = handle.strip_prefix('@').unwrap_or(handle);
        format!("{}{}", self.info().base_url, handle)
    }
}

/// Registry entry describing a card variant's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDescriptor {
    /// Size assigned when the caller does not specify one
    pub default_size: Size,
    /// Custom fields a complete card of this kind carries
    pub required_fields: &'static [&'static str],
    /// Placeholder text for editable cards
    pub default_text: &'static str,
}

/// Describe a platform's rendering contract.
///
/// Pure data, consulted by the add-card operation and the block dispatcher.
pub fn descriptor(platform: Platform) -> CardDescriptor {
    if platform.is_social() {
        return CardDescriptor {
            default_size: Size::new(1, 1),
            required_fields: &["text"],
            default_text: "@handle",
        };
    }
    match platform {
        Platform::Custom => CardDescriptor {
            default_size: Size::new(2, 1),
            required_fields: &["title", "text"],
            default_text: "Write something...",
        },
        Platform::Code => CardDescriptor {
            default_size: Size::new(2, 1),
            required_fields: &["command"],
            default_text: "echo hello",
        },
        Platform::Qr => CardDescriptor {
            default_size: Size::new(1, 1),
            required_fields: &["url"],
            default_text: "",
        },
        Platform::Map => CardDescriptor {
            default_size: Size::new(2, 2),
            required_fields: &["lat", "lng", "zoom"],
            default_text: "",
        },
        Platform::Tv => CardDescriptor {
            default_size: Size::new(2, 2),
            required_fields: &["video_id"],
            default_text: "",
        },
        Platform::Url => CardDescriptor {
            default_size: Size::new(1, 1),
            required_fields: &["url", "title"],
            default_text: "My link",
        },
        Platform::Image => CardDescriptor {
            default_size: Size::new(1, 1),
            required_fields: &["image"],
            default_text: "",
        },
        Platform::Video => CardDescriptor {
            default_size: Size::new(2, 2),
            required_fields: &["url"],
            default_text: "",
        },
        Platform::AmazonProduct | Platform::MercadolibreProduct | Platform::GenericProduct => {
            CardDescriptor {
                default_size: Size::new(1, 2),
                required_fields: &["title", "url", "image", "price"],
                default_text: "",
            }
        }
        // Social platforms handled above
        _ => unreachable!("social platforms are handled by the is_social branch"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_tags_are_kebab_case() {
        let tag = serde_json::to_string(&Platform::AmazonProduct).unwrap();
        assert_eq!(tag, "\"amazon-product\"");

        let parsed: Platform = serde_json::from_str("\"stackoverflow\"").unwrap();
        assert_eq!(parsed, Platform::Stackoverflow);
    }

    #[test]
    fn test_display_matches_serde_tag() {
        assert_eq!(Platform::MercadolibreProduct.to_string(), "mercadolibre-product");
        assert_eq!(Platform::Github.to_string(), "github");
    }

    #[test]
    fn test_social_sub_tag_covers_exactly_sixteen() {
        let socials: Vec<_> = Platform::ALL.iter().filter(|p| p.is_social()).collect();
        assert_eq!(socials.len(), 16);
        assert!(!Platform::Url.is_social());
        assert!(!Platform::GenericProduct.is_social());
    }

    #[test]
    fn test_profile_url_strips_leading_at() {
        let p = SocialPlatform::Github;
        assert_eq!(p.profile_url("@octocat"), "https://github.com/octocat");
        assert_eq!(p.profile_url("octocat"), "https://github.com/octocat");
        assert_eq!(p.profile_url("  @octocat "), "https://github.com/octocat");
    }

    #[test]
    fn test_profile_urls_parse() {
        for platform in Platform::ALL.iter().filter_map(|p| p.social()) {
            let derived = platform.profile_url("someone");
            url::Url::parse(&derived).expect("derived profile URL must be valid");
        }
    }

    #[test]
    fn test_descriptor_covers_every_platform() {
        for platform in Platform::ALL {
            let desc = descriptor(platform);
            assert!(desc.default_size.w >= 1 && desc.default_size.h >= 1);
        }
    }

    #[test]
    fn test_descriptor_defaults() {
        assert_eq!(descriptor(Platform::Map).default_size, Size::new(2, 2));
        assert_eq!(descriptor(Platform::Qr).default_size, Size::new(1, 1));
        assert!(descriptor(Platform::Url).required_fields.contains(&"title"));
        assert_eq!(descriptor(Platform::Twitter).default_text, "@handle");
    }
}
