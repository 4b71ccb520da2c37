fn main() {
	println!("cargo:rerun-if-env-changed=SERVER_URL");

	// empty means "same origin as the page"
	let server_url = std::env::var("SERVER_URL").unwrap_or_default();
	println!("cargo:rustc-env=SERVER_URL={server_url}");
}
