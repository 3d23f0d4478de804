#![forbid(unsafe_code)]

use core::cell::{Cell, RefCell};
use core::time::Duration;
use std::rc::{Rc, Weak};

use folio_core::{
    ClassOp, DocumentLayout, DocumentMode, FolioConfig, IntersectionEntry, Marker, NavLink,
    PageId, SectionOffset,
};
use folio_view::{CONTENT_SECTION_CLASS, MENU_BUTTON_ID, NAV_LINK_CLASS, PROJECT_CARD_CLASS};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::WebError;
use crate::WebOutputs;
use crate::step_program::{HostEvent, StepPortfolio};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn js(err: JsValue) -> WebError {
    WebError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Browser binding for the portfolio.
///
/// `init` mounts into an existing root element, renders, and subscribes to
/// window resize and scroll, delegated clicks, and visibility of reveal
/// targets. `destroy` removes every subscription.
#[wasm_bindgen]
pub struct PortfolioWeb {
    mounted: Option<Rc<Mounted>>,
}

#[wasm_bindgen]
impl PortfolioWeb {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { mounted: None }
    }

    /// Mount into `root`. `options` is an optional config object; missing
    /// fields take their defaults.
    pub fn init(&mut self, root: HtmlElement, options: Option<JsValue>) -> Result<(), JsValue> {
        if self.mounted.is_some() {
            return Err(WebError::AlreadyInitialized.into());
        }
        let config = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                serde_wasm_bindgen::from_value::<FolioConfig>(value)
                    .map_err(|err| WebError::Js(err.to_string()))?
            }
            _ => FolioConfig::default(),
        };
        let mounted = Mounted::mount(root, config)?;
        self.mounted = Some(mounted);
        Ok(())
    }

    /// Navigate to `route`. Unknown routes are rejected without effect.
    pub fn navigate(&mut self, route: &str) -> Result<(), JsValue> {
        let mounted = self.mounted.as_ref().ok_or(WebError::NotInitialized)?;
        route.parse::<PageId>().map_err(WebError::from)?;
        mounted.push(HostEvent::Navigate {
            route: route.to_string(),
        });
        mounted.pump()?;
        Ok(())
    }

    /// Identifier of the current page.
    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> Option<String> {
        self.mounted
            .as_ref()
            .map(|m| m.prog.borrow().app().current_page().id().to_string())
    }

    /// `"mobile"` or `"desktop"`.
    #[wasm_bindgen(js_name = layoutMode)]
    pub fn layout_mode(&self) -> Option<String> {
        self.mounted
            .as_ref()
            .map(|m| m.prog.borrow().app().layout_mode().label().to_string())
    }

    /// Explicit teardown for JS callers. Removes every listener, disconnects
    /// the observer and cancels any pending frame.
    pub fn destroy(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.teardown();
        }
    }
}

impl Drop for PortfolioWeb {
    fn drop(&mut self) {
        self.destroy();
    }
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, WebError> {
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(js)?;
        Ok(Self {
            target,
            kind,
            callback,
        })
    }

    fn detach(&self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!(kind = self.kind, ?err, "failed to detach listener");
        }
    }
}

type IntersectCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Mounted {
    window: Window,
    document: Document,
    root: HtmlElement,
    nav_host: Element,
    main_host: Element,
    prog: RefCell<StepPortfolio>,
    listeners: RefCell<Vec<Listener>>,
    observer: RefCell<Option<(IntersectionObserver, IntersectCallback)>>,
    frame_callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    frame_handle: Cell<Option<i32>>,
}

impl Mounted {
    fn mount(root: HtmlElement, config: FolioConfig) -> Result<Rc<Self>, WebError> {
        let window = web_sys::window().ok_or(WebError::MissingElement("window"))?;
        let document = window
            .document()
            .ok_or(WebError::MissingElement("document"))?;
        let width = window.inner_width().map_err(js)?.as_f64().unwrap_or(0.0);
        let threshold = config.reveal_threshold;

        root.set_inner_html("");
        let nav_host = document.create_element("div").map_err(js)?;
        nav_host.set_class_name("nav-host");
        let main_host = document.create_element("div").map_err(js)?;
        main_host.set_class_name("main-host");
        root.append_child(&nav_host).map_err(js)?;
        root.append_child(&main_host).map_err(js)?;

        let mut prog = StepPortfolio::new(config, width)?;
        prog.set_time(now(&window));
        prog.init()?;

        let mounted = Rc::new(Self {
            window,
            document,
            root,
            nav_host,
            main_host,
            prog: RefCell::new(prog),
            listeners: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
            frame_callback: RefCell::new(None),
            frame_handle: Cell::new(None),
        });
        mounted.install(threshold)?;
        let outputs = mounted.prog.borrow_mut().take_outputs();
        mounted.settle(outputs)?;
        tracing::info!(width, "portfolio mounted");
        Ok(mounted)
    }

    fn install(self: &Rc<Self>, threshold: f64) -> Result<(), WebError> {
        let weak = Rc::downgrade(self);
        let mut listeners = Vec::with_capacity(3);

        listeners.push(Listener::attach(
            self.window.clone().into(),
            "resize",
            handler(&weak, |m, _| {
                let width = m.window.inner_width().map_err(js)?.as_f64().unwrap_or(0.0);
                m.push(HostEvent::Resize { width });
                Ok(())
            }),
        )?);
        listeners.push(Listener::attach(
            self.window.clone().into(),
            "scroll",
            handler(&weak, |m, _| {
                let y = m.window.scroll_y().map_err(js)?;
                m.push(HostEvent::Scroll { y });
                Ok(())
            }),
        )?);
        listeners.push(Listener::attach(
            self.root.clone().into(),
            "click",
            handler(&weak, |m, event| {
                if let Some(host_event) = click_event(&event)? {
                    if m.prog.borrow().suppresses_default(&host_event) {
                        event.prevent_default();
                    }
                    if let HostEvent::Navigate { route } = &host_event {
                        m.scroll_to_section(route);
                    }
                    m.push(host_event);
                }
                Ok(())
            }),
        )?);
        *self.listeners.borrow_mut() = listeners;

        let intersect_weak = weak.clone();
        let callback: IntersectCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let Some(m) = intersect_weak.upgrade() else {
                    return;
                };
                let entries = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| {
                        IntersectionEntry::new(
                            entry.target().id(),
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        )
                    })
                    .collect::<Vec<_>>();
                m.push(HostEvent::Intersect { entries });
                if let Err(err) = m.pump() {
                    tracing::error!(%err, "intersection update failed");
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js)?;
        *self.observer.borrow_mut() = Some((observer, callback));

        let frame_weak = weak;
        *self.frame_callback.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            let Some(m) = frame_weak.upgrade() else {
                return;
            };
            m.frame_handle.set(None);
            if let Err(err) = m.pump() {
                tracing::error!(%err, "frame update failed");
            }
        }));
        Ok(())
    }

    /// Scroll a stacked document to the section for `route`. Paged
    /// documents swap pages instead.
    fn scroll_to_section(&self, route: &str) {
        if self.prog.borrow().app().document_mode() != DocumentMode::Scrolling {
            return;
        }
        if let Some(section) = self.document.get_element_by_id(route) {
            section.scroll_into_view();
        }
    }

    fn push(&self, event: HostEvent) {
        self.prog.borrow_mut().push_event(event);
    }

    /// Step, apply the outputs, and keep frames coming while animating.
    fn pump(&self) -> Result<(), WebError> {
        let outputs = {
            let mut prog = self.prog.borrow_mut();
            prog.set_time(now(&self.window));
            prog.step()?;
            prog.take_outputs()
        };
        self.settle(outputs)
    }

    fn settle(&self, outputs: WebOutputs) -> Result<(), WebError> {
        let remeasure = outputs.needs_measure();
        self.apply(outputs)?;
        if remeasure {
            let layout = self.measure();
            self.observe(&layout.reveal_targets);
            let outputs = {
                let mut prog = self.prog.borrow_mut();
                prog.push_event(HostEvent::Document { layout });
                prog.step()?;
                prog.take_outputs()
            };
            self.apply(outputs)?;
        }
        if self.prog.borrow().wants_frames() {
            self.request_frame()?;
        }
        Ok(())
    }

    fn apply(&self, outputs: WebOutputs) -> Result<(), WebError> {
        let WebOutputs {
            nav_html,
            main_html,
            frame_style,
            class_ops,
            logs,
        } = outputs;
        let replaced = nav_html.is_some() || main_html.is_some();
        if let Some(html) = nav_html {
            self.nav_host.set_inner_html(&html);
            let layout = self.prog.borrow().app().layout_mode();
            self.root.set_class_name(&format!("app {}", layout.label()));
        }
        if let Some(html) = main_html {
            self.main_host.set_inner_html(&html);
        }
        if let Some(style) = frame_style
            && let Some(page) = self.main_host.query_selector(".page").map_err(js)?
        {
            page.set_attribute("style", &style).map_err(js)?;
        }
        for op in &class_ops {
            self.apply_class_op(op)?;
        }
        for line in &logs {
            tracing::warn!(message = %line);
        }
        if replaced {
            self.create_icons();
        }
        Ok(())
    }

    fn apply_class_op(&self, op: &ClassOp) -> Result<(), WebError> {
        let class = op.marker.class_name();
        let targets = match op.marker {
            Marker::Active => {
                let selector = format!(r#".{NAV_LINK_CLASS}[href="{}"]"#, op.key);
                select_all(&self.nav_host, &selector)?
            }
            Marker::Visible | Marker::Open => {
                self.document.get_element_by_id(&op.key).into_iter().collect()
            }
        };
        for target in targets {
            let list = target.class_list();
            let result = if op.add {
                list.add_1(class)
            } else {
                list.remove_1(class)
            };
            result.map_err(js)?;
        }
        if op.marker == Marker::Open
            && let Some(button) = self.document.get_element_by_id(MENU_BUTTON_ID)
        {
            button
                .set_attribute("aria-expanded", if op.add { "true" } else { "false" })
                .map_err(js)?;
        }
        Ok(())
    }

    fn measure(&self) -> DocumentLayout {
        let sections_selector = format!(".{CONTENT_SECTION_CLASS}");
        let sections = select_all(&self.main_host, &sections_selector)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|el| {
                let top = el.dyn_ref::<HtmlElement>()?.offset_top();
                Some(SectionOffset::new(el.id(), f64::from(top)))
            })
            .collect();
        let links = select_all(&self.nav_host, &format!(".{NAV_LINK_CLASS}"))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|el| el.get_attribute("href"))
            .map(NavLink::new)
            .collect();
        let targets_selector = format!(".{CONTENT_SECTION_CLASS}, .{PROJECT_CARD_CLASS}");
        let reveal_targets = select_all(&self.main_host, &targets_selector)
            .unwrap_or_default()
            .into_iter()
            .map(|el| el.id())
            .filter(|id| !id.is_empty())
            .collect();
        DocumentLayout {
            sections,
            links,
            reveal_targets,
            has_menu_button: self.document.get_element_by_id(MENU_BUTTON_ID).is_some(),
        }
    }

    fn observe(&self, keys: &[String]) {
        let observer = self.observer.borrow();
        let Some((observer, _)) = observer.as_ref() else {
            return;
        };
        observer.disconnect();
        for key in keys {
            if let Some(el) = self.document.get_element_by_id(key) {
                observer.observe(&el);
            }
        }
    }

    fn request_frame(&self) -> Result<(), WebError> {
        if self.frame_handle.get().is_some() {
            return Ok(());
        }
        let callback = self.frame_callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let handle = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(js)?;
        self.frame_handle.set(Some(handle));
        Ok(())
    }

    /// Materialize `data-lucide` placeholders when the icon library is loaded.
    fn create_icons(&self) {
        let Ok(lucide) = js_sys::Reflect::get(&self.window, &JsValue::from_str("lucide")) else {
            return;
        };
        if lucide.is_undefined() {
            return;
        }
        let create = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        if let Some(create) = create
            && let Err(err) = create.call0(&lucide)
        {
            tracing::warn!(?err, "lucide.createIcons failed");
        }
    }

    fn teardown(&self) {
        for listener in self.listeners.borrow_mut().drain(..) {
            listener.detach();
        }
        if let Some((observer, _callback)) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        if let Some(handle) = self.frame_handle.take()
            && let Err(err) = self.window.cancel_animation_frame(handle)
        {
            tracing::warn!(?err, "failed to cancel animation frame");
        }
        self.frame_callback.borrow_mut().take();
        tracing::info!("portfolio destroyed");
    }
}

/// Wrap `f` as an event callback that steps the runner afterwards.
fn handler(
    weak: &Weak<Mounted>,
    f: impl Fn(&Mounted, Event) -> Result<(), WebError> + 'static,
) -> Closure<dyn FnMut(Event)> {
    let weak = weak.clone();
    Closure::new(move |event: Event| {
        let Some(m) = weak.upgrade() else {
            return;
        };
        if let Err(err) = f(&m, event).and_then(|()| m.pump()) {
            tracing::error!(%err, "event handling failed");
        }
    })
}

/// Translate a click into a host event: route links navigate, the menu
/// button toggles the drawer.
fn click_event(event: &Event) -> Result<Option<HostEvent>, WebError> {
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return Ok(None);
    };
    if target
        .closest(&format!("#{MENU_BUTTON_ID}"))
        .map_err(js)?
        .is_some()
    {
        return Ok(Some(HostEvent::ToggleMenu));
    }
    let Some(link) = target.closest("[data-route]").map_err(js)? else {
        return Ok(None);
    };
    let Some(route) = link.get_attribute("data-route") else {
        return Ok(None);
    };
    if link.class_list().contains(NAV_LINK_CLASS) {
        Ok(Some(HostEvent::LinkClicked { route }))
    } else {
        Ok(Some(HostEvent::Navigate { route }))
    }
}

fn select_all(scope: &Element, selector: &str) -> Result<Vec<Element>, WebError> {
    let list = scope.query_selector_all(selector).map_err(js)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn now(window: &Window) -> Duration {
    let ms = window
        .performance()
        .map_or(0.0, |performance| performance.now());
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}
