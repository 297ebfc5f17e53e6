#[macro_export]
macro_rules! info_parse {
    ($name:expr, $pair:expr) => {
        info!(
            "Parsing {} {:?}: {:?}",
            $name,
            $pair.as_rule(),
            $pair.as_str()
        );
    };
}

/// Generates one test per source file asserting that it parses into a
/// block of `$count` top-level statements.
#[macro_export]
macro_rules! test_parse {
    ($($name:ident: $file:expr => $count:expr,)*) => {
    $(
        #[test]
        fn $name(){
            let _ = env_logger::try_init();
            let src = include_str!($file);
            info!("Reading file: {:?}", $file);
            let ast = parse(src);
            assert!(ast.is_ok(), "{}", ast.unwrap_err());
            let ast = ast.unwrap();
            for stmt in &ast.statements {
                info!("{:?}", stmt);
            }
            assert_eq!(ast.statements.len(), $count);
        }
    )*
    }
}
