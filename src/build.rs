// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/shopee_scrape.ico"); // multi-size .ico
        res.compile().unwrap();
    }
}
