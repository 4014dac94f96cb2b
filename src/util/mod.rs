use_and_export!(format);
