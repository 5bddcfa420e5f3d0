//! Block dispatcher
//!
//! Maps a card id to the widget view that renders it: looks up the card and
//! its current-breakpoint geometry, then branches exhaustively on the
//! platform tag. Adding a platform variant is a compile-time change here.
//!
//! The dispatcher is tolerant of transient desync between the stores: an
//! absent card renders nothing, absent geometry falls back to a 1x1 cell.
//! Neither is an error.

use pagegrid_core::{
    Breakpoint, CardId, CardStore, GridLayout, Platform, SocialInfo, SocialPlatform,
};

/// Resolved geometry for a block, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGeometry {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Default for BlockGeometry {
    fn default() -> Self {
        Self { x: 0, y: 0, w: 1, h: 1 }
    }
}

/// Product card flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Amazon,
    Mercadolibre,
    Generic,
}

/// The normalized payload a block renderer receives.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    /// Social link card with branding and the derived outbound profile URL
    Social {
        platform: SocialPlatform,
        info: SocialInfo,
        handle: String,
        url: String,
    },
    /// Generic link card
    Link { title: String, url: String },
    /// Free-text block with an optional gradient
    Note {
        title: Option<String>,
        text: String,
        gradient: usize,
    },
    /// Terminal-styled code snippet
    Terminal { command: String },
    /// QR code for a target URL
    QrCode { payload: String },
    /// Map centered on a coordinate
    Map { lat: f64, lng: f64, zoom: u8 },
    /// Embedded video player by id
    Tv { video_id: String },
    /// Plain image (data URI payload)
    Image { data: Option<String>, caption: Option<String> },
    /// Raw video file by URL
    VideoFile { url: String },
    /// Product card with price/rating facts
    Product {
        kind: ProductKind,
        title: String,
        url: Option<String>,
        image: Option<String>,
        price: Option<String>,
        rating: Option<f32>,
        review_count: Option<u32>,
    },
}

/// One renderable block: payload plus resolved geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockView {
    pub card_id: CardId,
    pub geometry: BlockGeometry,
    pub kind: BlockKind,
}

/// Build the view for one card on the given breakpoint.
///
/// Returns `None` when the card has been deleted (a cell can outlive its
/// card for a frame). A named platform always wins over generic URL
/// inference: a social card whose fields happen to carry `url` + `title`
/// still dispatches as social.
pub fn block_view(
    cards: &CardStore,
    layout: &GridLayout,
    breakpoint: Breakpoint,
    card_id: CardId,
) -> Option<BlockView> {
    let card = cards.get(card_id)?;

    let geometry = layout
        .entry(breakpoint, card_id)
        .map(|e| BlockGeometry {
            x: e.x,
            y: e.y,
            w: e.w,
            h: e.h,
        })
        .unwrap_or_default();

    let fields = &card.fields;
    let kind = if let Some(social) = card.platform.social() {
        let handle = fields.text.clone().unwrap_or_default();
        BlockKind::Social {
            platform: social,
            info: social.info(),
            url: social.profile_url(&handle),
            handle,
        }
    } else {
        match card.platform {
            Platform::Custom => {
                // A text-less custom card carrying url + title is the ad hoc
                // link shape; it renders as a generic link card.
                match (&fields.text, &fields.url, &fields.title) {
                    (None, Some(url), Some(title)) => BlockKind::Link {
                        title: title.clone(),
                        url: url.clone(),
                    },
                    _ => BlockKind::Note {
                        title: fields.title.clone(),
                        text: fields.text.clone().unwrap_or_default(),
                        gradient: fields.gradient.unwrap_or(0),
                    },
                }
            }
            Platform::Code => BlockKind::Terminal {
                command: fields.command.clone().unwrap_or_default(),
            },
            Platform::Qr => BlockKind::QrCode {
                payload: fields.url.clone().unwrap_or_default(),
            },
            Platform::Map => BlockKind::Map {
                lat: fields.lat.unwrap_or(0.0),
                lng: fields.lng.unwrap_or(0.0),
                zoom: fields.zoom.unwrap_or(12),
            },
            Platform::Tv => BlockKind::Tv {
                video_id: fields.video_id.clone().unwrap_or_default(),
            },
            Platform::Url => BlockKind::Link {
                title: fields.title.clone().unwrap_or_default(),
                url: fields.url.clone().unwrap_or_default(),
            },
            Platform::Image => BlockKind::Image {
                data: fields.image.clone(),
                caption: fields.title.clone(),
            },
            Platform::Video => BlockKind::VideoFile {
                url: fields.url.clone().unwrap_or_default(),
            },
            Platform::AmazonProduct
            | Platform::MercadolibreProduct
            | Platform::GenericProduct => BlockKind::Product {
                kind: match card.platform {
                    Platform::AmazonProduct => ProductKind::Amazon,
                    Platform::MercadolibreProduct => ProductKind::Mercadolibre,
                    _ => ProductKind::Generic,
                },
                title: fields.title.clone().unwrap_or_default(),
                url: fields.url.clone(),
                image: fields.image.clone(),
                price: fields.price.clone(),
                rating: fields.rating,
                review_count: fields.review_count,
            },
            // Social platforms handled above
            _ => unreachable!("social platforms are handled by the social branch"),
        }
    };

    Some(BlockView {
        card_id,
        geometry,
        kind,
    })
}

/// Views for every card on the page, in insertion order.
pub fn all_block_views(
    cards: &CardStore,
    layout: &GridLayout,
    breakpoint: Breakpoint,
) -> Vec<BlockView> {
    cards
        .list()
        .iter()
        .filter_map(|c| block_view(cards, layout, breakpoint, c.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagegrid_core::{CardFields, Size};

    fn stores() -> (CardStore, GridLayout) {
        (CardStore::new(), GridLayout::new())
    }

    #[test]
    fn test_absent_card_renders_nothing() {
        let (cards, layout) = stores();
        assert!(block_view(&cards, &layout, Breakpoint::Lg, CardId(0)).is_none());
    }

    #[test]
    fn test_missing_geometry_defaults_to_unit_cell() {
        let (mut cards, layout) = stores();
        // Card exists but the layout store hasn't caught up
        let id = cards.add(Platform::Qr, CardFields::default());

        let view = block_view(&cards, &layout, Breakpoint::Lg, id).unwrap();
        assert_eq!(view.geometry, BlockGeometry::default());
    }

    #[test]
    fn test_social_dispatch_derives_profile_url() {
        let (mut cards, mut layout) = stores();
        let id = cards.add(
            Platform::Github,
            CardFields {
                text: Some("@octocat".into()),
                ..CardFields::default()
            },
        );
        layout.add_entry(id, Size::new(1, 1));

        let view = block_view(&cards, &layout, Breakpoint::Lg, id).unwrap();
        match view.kind {
            BlockKind::Social { platform, url, handle, .. } => {
                assert_eq!(platform, SocialPlatform::Github);
                assert_eq!(url, "https://github.com/octocat");
                assert_eq!(handle, "@octocat");
            }
            other => panic!("expected social block, got {other:?}"),
        }
    }

    #[test]
    fn test_named_platform_wins_over_url_inference() {
        // A social card whose fields carry url + title must not be
        // misrendered as a generic link card.
        let (mut cards, mut layout) = stores();
        let id = cards.add(
            Platform::Twitter,
            CardFields {
                text: Some("rustlang".into()),
                url: Some("https://elsewhere.test".into()),
                title: Some("Not a link card".into()),
                ..CardFields::default()
            },
        );
        layout.add_entry(id, Size::new(1, 1));

        let view = block_view(&cards, &layout, Breakpoint::Lg, id).unwrap();
        assert!(matches!(view.kind, BlockKind::Social { .. }));
    }

    #[test]
    fn test_custom_card_with_url_and_title_renders_as_link() {
        // The ad hoc shape: an unbranded card carrying url + title and no
        // text of its own. Built via replace_all because add() would merge
        // the registry's placeholder text.
        let (mut cards, mut layout) = stores();
        cards.replace_all(vec![pagegrid_core::Card {
            id: CardId(0),
            platform: Platform::Custom,
            fields: CardFields {
                url: Some("https://blog.test".into()),
                title: Some("Blog".into()),
                ..CardFields::default()
            },
        }]);
        layout.add_entry(CardId(0), Size::new(1, 1));

        let view = block_view(&cards, &layout, Breakpoint::Lg, CardId(0)).unwrap();
        match view.kind {
            BlockKind::Link { title, url } => {
                assert_eq!(title, "Blog");
                assert_eq!(url, "https://blog.test");
            }
            other => panic!("expected link block, got {other:?}"),
        }
    }

    #[test]
    fn test_geometry_follows_breakpoint() {
        let (mut cards, mut layout) = stores();
        let id = cards.add(Platform::Map, CardFields::default());
        layout.add_entry(id, Size::new(4, 2));

        let lg = block_view(&cards, &layout, Breakpoint::Lg, id).unwrap();
        let xs = block_view(&cards, &layout, Breakpoint::Xs, id).unwrap();
        assert_eq!(lg.geometry.w, 4);
        assert_eq!(xs.geometry.w, 2);
    }

    #[test]
    fn test_every_platform_dispatches() {
        let (mut cards, mut layout) = stores();
        for platform in Platform::ALL {
            let id = cards.add(platform, CardFields::default());
            layout.add_entry(id, Size::new(1, 1));
            assert!(
                block_view(&cards, &layout, Breakpoint::Lg, id).is_some(),
                "no view for {platform}"
            );
        }
        assert_eq!(
            all_block_views(&cards, &layout, Breakpoint::Lg).len(),
            Platform::ALL.len()
        );
    }

    #[test]
    fn test_product_dispatch_carries_facts() {
        let (mut cards, mut layout) = stores();
        let id = cards.add(
            Platform::AmazonProduct,
            CardFields {
                title: Some("Mechanical keyboard".into()),
                price: Some("$99".into()),
                rating: Some(4.5),
                review_count: Some(1234),
                ..CardFields::default()
            },
        );
        layout.add_entry(id, Size::new(1, 2));

        let view = block_view(&cards, &layout, Breakpoint::Lg, id).unwrap();
        match view.kind {
            BlockKind::Product { kind, price, rating, review_count, .. } => {
                assert_eq!(kind, ProductKind::Amazon);
                assert_eq!(price.as_deref(), Some("$99"));
                assert_eq!(rating, Some(4.5));
                assert_eq!(review_count, Some(1234));
            }
            other => panic!("expected product block, got {other:?}"),
        }
    }
}
