fn main() {
    console_error_panic_hook::set_once();
    leptos::task::spawn_local(thermaldash_adapter_dashboard_leptos::boot());
}
