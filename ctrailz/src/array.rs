use std::ops;

use crate::dims::Dims;

/// Row-major 2D buffer, indexed by [`Dims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// Rows from north to south, each as a slice of `width` items.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on zero, an empty buffer yields no rows either way
        self.buf.chunks(self.width.max(1))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }
}

impl<T> Array2D<T> {
    /// Builds the array by calling `f` for every position in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Dims) -> T) -> Self {
        let buf = Dims::iter_fill(Dims::ZERO, Dims(width as i32, height as i32))
            .map(&mut f)
            .collect();

        Self { buf, width, height }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::{Array2D, Dims};

    #[test]
    fn index_round_trip() {
        let arr = Array2D::new(0u8, 4, 3);
        assert_eq!(arr.len(), 12);
        assert_eq!(arr.dim_to_idx(Dims(3, 2)), Some(11));
        assert_eq!(arr.idx_to_dim(5), Some(Dims(1, 1)));
        assert_eq!(arr.dim_to_idx(Dims(4, 0)), None);
        assert_eq!(arr.dim_to_idx(Dims(-1, 0)), None);
        assert_eq!(arr.idx_to_dim(12), None);
    }

    #[test]
    fn from_fn_and_rows() {
        let arr = Array2D::from_fn(3, 2, |Dims(x, y)| x + 10 * y);
        assert_eq!(arr[Dims(2, 1)], 12);

        let rows: Vec<_> = arr.rows().collect();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[10, 11, 12][..]]);
    }

    #[test]
    fn empty_array() {
        let arr: Array2D<u8> = Array2D::new(0, 0, 5);
        assert!(arr.is_empty());
        assert_eq!(arr.rows().count(), 0);
        assert_eq!(arr.iter_pos().count(), 0);
    }
}
