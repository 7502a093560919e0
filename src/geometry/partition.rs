use super::line::{HorizonLine, Side};

/// Classification of one pixel against a candidate line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelClass {
    pub side: Side,
    /// Perpendicular distance to the line is at most the buffer half-width.
    pub in_buffer: bool,
}

/// Pixel subsets a statistic can be taken over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Above,
    Below,
    /// Every pixel of the image.
    All,
    Buffer,
    BufferAbove,
    BufferBelow,
}

impl Region {
    #[inline]
    pub fn contains(self, class: PixelClass) -> bool {
        match self {
            Region::Above => class.side == Side::Above,
            Region::Below => class.side == Side::Below,
            Region::All => true,
            Region::Buffer => class.in_buffer,
            Region::BufferAbove => class.in_buffer && class.side == Side::Above,
            Region::BufferBelow => class.in_buffer && class.side == Side::Below,
        }
    }
}

/// Above/below halfplanes and the buffer strip for one candidate line.
///
/// The partition is evaluated lazily per pixel; [`Partition::masks`]
/// materialises it when a caller needs explicit membership arrays.
#[derive(Clone, Copy, Debug)]
pub struct Partition {
    line: HorizonLine,
    buffer_half_width: f64,
}

impl Partition {
    /// Negative or non-finite half-widths collapse the buffer onto the line.
    pub fn new(line: HorizonLine, buffer_half_width: f64) -> Self {
        let buffer_half_width = if buffer_half_width.is_finite() {
            buffer_half_width.max(0.0)
        } else {
            0.0
        };
        Self {
            line,
            buffer_half_width,
        }
    }

    pub fn line(&self) -> &HorizonLine {
        &self.line
    }

    pub fn buffer_half_width(&self) -> f64 {
        self.buffer_half_width
    }

    #[inline]
    fn class_from_signed(&self, signed: f64) -> PixelClass {
        PixelClass {
            side: Side::from_signed(signed),
            in_buffer: signed.abs() <= self.buffer_half_width,
        }
    }

    /// Classify pixel `(x, y)`.
    #[inline]
    pub fn classify(&self, x: usize, y: usize) -> PixelClass {
        self.class_from_signed(self.line.pixel_signed_distance(x, y))
    }

    /// Classify every pixel of row `y`, left to right.
    pub fn classify_row(&self, y: usize) -> impl Iterator<Item = PixelClass> + '_ {
        let row = self.line.row_term(y);
        let nx = self.line.normal().x;
        let cx = self.line.center().x;
        (0..self.line.width())
            .map(move |x| self.class_from_signed(nx * (x as f64 + 0.5 - cx) + row))
    }

    /// Materialise the three membership masks in row-major order.
    pub fn masks(&self) -> PartitionMasks {
        let (w, h) = (self.line.width(), self.line.height());
        let mut masks = PartitionMasks {
            width: w,
            height: h,
            above: vec![false; w * h],
            below: vec![false; w * h],
            buffer: vec![false; w * h],
        };
        for y in 0..h {
            for (x, class) in self.classify_row(y).enumerate() {
                let i = y * w + x;
                masks.above[i] = class.side == Side::Above;
                masks.below[i] = class.side == Side::Below;
                masks.buffer[i] = class.in_buffer;
            }
        }
        masks
    }
}

/// Explicit membership arrays for one partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionMasks {
    pub width: usize,
    pub height: usize,
    pub above: Vec<bool>,
    pub below: Vec<bool>,
    pub buffer: Vec<bool>,
}

impl PartitionMasks {
    pub fn above_count(&self) -> usize {
        self.above.iter().filter(|&&m| m).count()
    }

    pub fn below_count(&self) -> usize {
        self.below.iter().filter(|&&m| m).count()
    }

    pub fn buffer_count(&self) -> usize {
        self.buffer.iter().filter(|&&m| m).count()
    }
}
