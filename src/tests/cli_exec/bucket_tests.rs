    use super::*;

    #[test]
    fn count_line_pluralises_everything_but_one() {
        assert_eq!(bucket_count_line(0), "0 buckets in your account");
        assert_eq!(bucket_count_line(1), "1 bucket in your account");
        assert_eq!(bucket_count_line(2), "2 buckets in your account");
    }
