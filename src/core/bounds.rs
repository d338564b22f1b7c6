use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub height: i32,
    pub width: i32,
}

impl BoundsOriginRoot {
    pub fn new(height: i32, width: i32) -> BoundsOriginRoot {
        BoundsOriginRoot { height, width }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.height && pos.j >= 0 && pos.j < self.width
    }

    pub fn area(&self) -> i32 {
        self.height * self.width
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_uses_both_dimensions() {
        let bounds = BoundsOriginRoot::new(2, 5);

        assert!(bounds.contains(&Vec2::new(0, 0)));
        assert!(bounds.contains(&Vec2::new(1, 4)));
        assert!(!bounds.contains(&Vec2::new(2, 0)));
        assert!(!bounds.contains(&Vec2::new(0, 5)));
        assert!(!bounds.contains(&Vec2::new(-1, 3)));
        assert!(!bounds.contains(&Vec2::new(1, -1)));
        assert_eq!(bounds.area(), 10);
    }
}
