#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayCoords {
    pub x: f64,
    pub y: f64,
}

/// `arrow` is the overlay edge carrying the indicator. It depends only on
/// the requested side, never on how far clamping moved the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    pub coords: OverlayCoords,
    pub side: Side,
    pub arrow: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayTicket(u64);

/// Single-slot show delay for one overlay. A new `begin` invalidates the
/// previous ticket, so a stale timer can never show the overlay after a
/// later hide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowDelay {
    generation: u64,
    pending: Option<u64>,
    shown: Option<u64>,
}

impl ShowDelay {
    pub fn begin(&mut self) -> DelayTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        DelayTicket(self.generation)
    }

    pub fn fire(&mut self, ticket: DelayTicket) -> bool {
        if self.pending != Some(ticket.0) {
            return false;
        }
        self.pending = None;
        self.shown = Some(ticket.0);
        true
    }

    pub fn end(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.shown = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    pub fn shown_ticket(&self) -> Option<DelayTicket> {
        self.shown.map(DelayTicket)
    }

    /// True while the show cycle started by `ticket` is still on screen.
    pub fn is_showing(&self, ticket: DelayTicket) -> bool {
        self.shown == Some(ticket.0)
    }
}
