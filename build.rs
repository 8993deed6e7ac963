fn main() {
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/logo.ico");
        res.set("ProductName", "San Antonio Restaurants");
        res.set("FileDescription", "San Antonio restaurant guide");
        res.compile().expect("Failed to compile Windows resources");
    }
}
