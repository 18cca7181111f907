use anyhow::{Result, bail};

/// Cursor value of the first artwork.
pub const FIRST: u8 = 1;
/// Sentinel cursor for the end-of-gallery "thanks" card.
pub const THANKS: u8 = 6;

/// All portraits in the collection are by the same hand.
pub const ARTIST: &str = "E. M. Hartley";

/// One row of the static artwork table: everything the shell needs to render
/// a single gallery screen.
pub struct Artwork {
    pub title: &'static str,
    pub detail: &'static str,
    /// PNG bytes embedded at build time.
    pub image: &'static [u8],
}

const ENTRIES: [Artwork; THANKS as usize] = [
    Artwork {
        title: "Ajax",
        detail: "A brooding study of the Greek hero at rest, caught in the \
                 moment between battles. The warm ochre ground was laid down \
                 first and left to show through the shadows.",
        image: include_bytes!("../assets/ajax.png"),
    },
    Artwork {
        title: "Australian Cowboy",
        detail: "A stockman from the high country, painted from life over two \
                 afternoons. The weathered face and pale drover's coat stand \
                 against a dusty summer sky.",
        image: include_bytes!("../assets/australian-cowboy.png"),
    },
    Artwork {
        title: "Bruce",
        detail: "A portrait of the artist's neighbour in cool morning light. \
                 The restrained blue palette keeps all the attention on the \
                 sitter's steady gaze.",
        image: include_bytes!("../assets/bruce.png"),
    },
    Artwork {
        title: "Vanuatu",
        detail: "Painted during a stay on Efate, this portrait pairs deep \
                 island greens with the sitter's easy, open expression. The \
                 background foliage is suggested rather than described.",
        image: include_bytes!("../assets/vanuatu.png"),
    },
    Artwork {
        title: "Whitman",
        detail: "An homage to the poet in his later years, all greys and warm \
                 whites. The loose brushwork in the beard was left deliberately \
                 unresolved.",
        image: include_bytes!("../assets/whitman.png"),
    },
    Artwork {
        title: "Thanks for Visiting",
        detail: "That concludes the collection. Step back through the gallery \
                 with the Previous button to revisit any of the portraits.",
        image: include_bytes!("../assets/thanks.png"),
    },
];

/// Rejects a table that cannot serve every reachable cursor value.
fn validate(entries: &[Artwork]) -> Result<()> {
    if entries.len() != THANKS as usize {
        bail!(
            "artwork table covers {} cursor values, expected {}",
            entries.len(),
            THANKS
        );
    }
    for (i, entry) in entries.iter().enumerate() {
        if entry.title.is_empty() || entry.detail.is_empty() || entry.image.is_empty() {
            bail!("artwork table entry {} is incomplete", i + 1);
        }
    }
    Ok(())
}

/// Bounded cursor over the artwork table: a linear filmstrip with an end
/// card, not a carousel. Advancing saturates at the end card; retreating from
/// the end card re-enters the gallery at the last artwork and the low end
/// clamps at the first.
pub struct Gallery {
    cursor: u8,
}

impl Gallery {
    /// Builds the gallery at the first artwork, validating the static table
    /// up front so an incomplete table fails at startup rather than mid-walk.
    pub fn new() -> Result<Self> {
        validate(&ENTRIES)?;
        tracing::debug!(artworks = ENTRIES.len() - 1, "gallery table validated");
        Ok(Self { cursor: FIRST })
    }

    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Steps to the next artwork, saturating at the end card.
    pub fn advance(&mut self) -> u8 {
        if self.cursor < THANKS {
            self.cursor += 1;
        }
        self.cursor
    }

    /// Steps to the previous artwork. From the end card this snaps to the
    /// last real artwork; from the first artwork it stays put.
    pub fn retreat(&mut self) -> u8 {
        if self.cursor >= THANKS {
            self.cursor = THANKS - 1;
        } else if self.cursor > FIRST {
            self.cursor -= 1;
        }
        self.cursor
    }

    /// The table row for the current cursor. Infallible once [`Gallery::new`]
    /// has validated the table, since the cursor never leaves [FIRST, THANKS].
    pub fn current(&self) -> &'static Artwork {
        &ENTRIES[(self.cursor - FIRST) as usize]
    }
}

#[cfg(test)]
pub(crate) fn entries() -> &'static [Artwork] {
    &ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_artwork() {
        let g = Gallery::new().unwrap();
        assert_eq!(g.cursor(), FIRST);
        assert_eq!(g.current().title, "Ajax");
    }

    #[test]
    fn advance_saturates_at_end_card() {
        let mut g = Gallery::new().unwrap();
        for _ in 0..10 {
            g.advance();
        }
        assert_eq!(g.cursor(), THANKS);
        assert_eq!(g.advance(), THANKS);
    }

    #[test]
    fn retreat_from_end_card_reenters_gallery() {
        let mut g = Gallery::new().unwrap();
        while g.advance() < THANKS {}
        assert_eq!(g.retreat(), THANKS - 1);
        assert_eq!(g.current().title, "Whitman");
    }

    #[test]
    fn retreat_clamps_at_first_artwork() {
        let mut g = Gallery::new().unwrap();
        assert_eq!(g.retreat(), FIRST);
        assert_eq!(g.retreat(), FIRST);
    }

    #[test]
    fn advance_then_retreat_round_trips_below_the_end_card() {
        for start in FIRST..THANKS {
            let mut g = Gallery::new().unwrap();
            while g.cursor() < start {
                g.advance();
            }
            g.advance();
            assert_eq!(g.retreat(), start);
        }
    }

    #[test]
    fn boundary_fixed_points() {
        // 5 -> 6 -> 5
        let mut g = Gallery::new().unwrap();
        while g.cursor() < THANKS - 1 {
            g.advance();
        }
        g.advance();
        assert_eq!(g.retreat(), THANKS - 1);
        // 6 -> 5 -> 6
        g.advance();
        assert_eq!(g.cursor(), THANKS);
        g.retreat();
        assert_eq!(g.advance(), THANKS);
    }

    #[test]
    fn walking_the_gallery_matches_the_table() {
        let mut g = Gallery::new().unwrap();
        let expected = [
            "Ajax",
            "Australian Cowboy",
            "Bruce",
            "Vanuatu",
            "Whitman",
            "Thanks for Visiting",
        ];
        assert_eq!(g.current().title, expected[0]);
        for title in &expected[1..] {
            g.advance();
            assert_eq!(g.current().title, *title);
        }
        g.retreat();
        assert_eq!(g.current().title, "Whitman");
    }

    #[test]
    fn validate_rejects_incomplete_entries() {
        let bad = [
            Artwork { title: "", detail: "d", image: b"x" },
            Artwork { title: "b", detail: "d", image: b"x" },
            Artwork { title: "c", detail: "d", image: b"x" },
            Artwork { title: "d", detail: "d", image: b"x" },
            Artwork { title: "e", detail: "d", image: b"x" },
            Artwork { title: "f", detail: "d", image: b"x" },
        ];
        assert!(validate(&bad).is_err());
    }

    #[test]
    fn validate_rejects_short_tables() {
        let short = [Artwork { title: "a", detail: "d", image: b"x" }];
        assert!(validate(&short).is_err());
    }
}
