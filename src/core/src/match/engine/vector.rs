use nalgebra::Vector2;

pub trait VectorExtensions {
    fn length(&self) -> f32;
    fn distance_to(&self, other: &Vector2<f32>) -> f32;

    /// Unit vector in the same direction. A zero vector stays zero.
    fn normalize_or_zero(&self) -> Vector2<f32>;
}

impl VectorExtensions for Vector2<f32> {
    #[inline]
    fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    fn distance_to(&self, other: &Vector2<f32>) -> f32 {
        (*self - *other).length()
    }

    #[inline]
    fn normalize_or_zero(&self) -> Vector2<f32> {
        let length = self.length();
        let divisor = if length == 0.0 { 1.0 } else { length };

        *self / divisor
    }
}
