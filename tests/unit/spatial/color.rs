//! Tests for color value semantics used by model keys

#[cfg(test)]
mod tests {
    use pixelchain::spatial::color::Color;
    use std::collections::HashSet;

    // Tests equality is value-based and sensitive to channel order
    // Verified by comparing sorted channels in equality
    #[test]
    fn test_channel_order_matters() {
        let a = Color::new([1, 2, 3]);
        let same = Color::new([1, 2, 3]);
        let swapped = Color::new([3, 2, 1]);

        assert_eq!(a, same);
        assert_ne!(a, swapped);
    }

    // Tests equal colors collapse to one hash set entry
    // Verified by hashing only the first channel
    #[test]
    fn test_hash_by_value() {
        let mut set = HashSet::new();
        set.insert(Color::new([10, 20, 30]));
        set.insert(Color::new([10, 20, 30]));
        set.insert(Color::new([10, 20, 31]));

        assert_eq!(set.len(), 2);
    }

    // Tests the unreached sentinel is all zero and is the default
    // Verified by filling the sentinel with 255
    #[test]
    fn test_unreached_sentinel() {
        let sentinel: Color<4> = Color::UNREACHED;
        assert_eq!(sentinel.channels(), &[0, 0, 0, 0]);
        assert_eq!(Color::<4>::default(), sentinel);
        assert!(sentinel.is_unreached());
        assert!(!Color::new([0, 0, 0, 1]).is_unreached());
    }

    // Tests hexadecimal display of channels
    // Verified by dropping zero padding
    #[test]
    fn test_display_hex() {
        assert_eq!(Color::new([255, 0, 16]).to_string(), "#ff0010");
        assert_eq!(Color::new([7]).to_string(), "#07");
    }

    // Tests conversion from channel arrays matches the constructor
    // Verified by reversing channels on conversion
    #[test]
    fn test_from_channel_array() {
        let color: Color<4> = [9, 8, 7, 6].into();

        assert_eq!(color, Color::new([9, 8, 7, 6]));
        assert_eq!(color.channels(), &[9, 8, 7, 6]);
    }
}
