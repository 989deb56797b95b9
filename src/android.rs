// Android camera roll bridge
//
// Calls into a JVM class (default `com/reactnativecommunity/cameraroll/CameraRollBridge`)
// through its static `invoke(String method, String argsJson): String` entry point.
// The JVM side talks to MediaStore and blocks until it has a reply, so every
// call runs on tokio's blocking pool. Android emits no progress events.

use crate::bridge::{self, encode_args};
use crate::config::BridgeConfig;
use async_trait::async_trait;
use jni::objects::{JClass, JObject, JString, JValue};
use ndk_context::android_context;
use photo_library::{
    AccessLevel, Album, AlbumQuery, Asset, AuthorizationStatus, ConversionOptions,
    EnumerationRequest, NativeCameraRoll, NativeError, NativePermissionModule, NativeSaveOptions,
    Page, Thumbnail, ThumbnailOptions,
};
use serde::de::DeserializeOwned;

const INVOKE_SIGNATURE: &str = "(Ljava/lang/String;Ljava/lang/String;)Ljava/lang/String;";

#[derive(Debug, Clone)]
pub struct AndroidBridge {
    config: BridgeConfig,
}

impl AndroidBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    async fn call<T>(&self, method: &'static str, args: String) -> Result<T, NativeError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let bridge_class = self.config.bridge_class.clone();
        log::debug!("Bridge call {} via {}", method, bridge_class);

        let reply = tokio::task::spawn_blocking(move || invoke(&bridge_class, method, &args))
            .await
            .map_err(|e| NativeError::Bridge(format!("Task join error: {}", e)))??;

        bridge::decode_reply(&reply)
    }
}

fn get_app_class_loader<'a>(env: &mut jni::JNIEnv<'a>) -> Result<JObject<'a>, NativeError> {
    // ActivityThread.currentActivityThread()
    let at_cls = env
        .find_class("android/app/ActivityThread")
        .map_err(|e| NativeError::Bridge(format!("ActivityThread not found: {}", e)))?;
    let at = env
        .call_static_method(
            &at_cls,
            "currentActivityThread",
            "()Landroid/app/ActivityThread;",
            &[],
        )
        .map_err(|e| NativeError::Bridge(format!("currentActivityThread failed: {}", e)))?
        .l()
        .map_err(|e| NativeError::Bridge(format!("currentActivityThread invalid: {}", e)))?;

    let app = env
        .call_method(&at, "getApplication", "()Landroid/app/Application;", &[])
        .map_err(|e| NativeError::Bridge(format!("getApplication failed: {}", e)))?
        .l()
        .map_err(|e| NativeError::Bridge(format!("getApplication invalid: {}", e)))?;

    if app.is_null() {
        return Err(NativeError::Bridge(
            "Application is null - app not initialized?".to_string(),
        ));
    }

    env.call_method(&app, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .map_err(|e| NativeError::Bridge(format!("getClassLoader failed: {}", e)))?
        .l()
        .map_err(|e| NativeError::Bridge(format!("getClassLoader invalid: {}", e)))
}

fn load_class<'a>(
    env: &mut jni::JNIEnv<'a>,
    loader: &JObject<'a>,
    fq_slash: &str,
) -> Result<JClass<'a>, NativeError> {
    // ClassLoader.loadClass wants the dotted form
    let fq_dot = fq_slash.replace('/', ".");
    let name: JString = env
        .new_string(fq_dot)
        .map_err(|e| NativeError::Bridge(format!("new_string failed: {}", e)))?;
    let cls_obj = env
        .call_method(
            loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&JObject::from(name))],
        )
        .map_err(|e| NativeError::Bridge(format!("ClassLoader.loadClass failed: {}", e)))?
        .l()
        .map_err(|e| NativeError::Bridge(format!("loadClass invalid: {}", e)))?;
    Ok(JClass::from(cls_obj))
}

/// Blocking round trip through `CameraRollBridge.invoke`
fn invoke(bridge_class: &str, method: &str, args: &str) -> Result<String, NativeError> {
    let vm_ptr = android_context().vm() as *mut *const jni::sys::JNIInvokeInterface_;
    let vm = unsafe { jni::JavaVM::from_raw(vm_ptr) }
        .map_err(|e| NativeError::Bridge(format!("JavaVM failed: {}", e)))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| NativeError::Bridge(format!("JNI attach failed: {}", e)))?;

    let loader = get_app_class_loader(&mut env)?;
    let cls = load_class(&mut env, &loader, bridge_class)?;

    let method_name: JString = env
        .new_string(method)
        .map_err(|e| NativeError::Bridge(format!("new_string failed: {}", e)))?;
    let args_json: JString = env
        .new_string(args)
        .map_err(|e| NativeError::Bridge(format!("new_string failed: {}", e)))?;

    let result = env.call_static_method(
        &cls,
        "invoke",
        INVOKE_SIGNATURE,
        &[
            JValue::Object(&JObject::from(method_name)),
            JValue::Object(&JObject::from(args_json)),
        ],
    );

    let reply = match result {
        Ok(value) => value
            .l()
            .map_err(|e| NativeError::Bridge(format!("invoke returned invalid object: {}", e)))?,
        Err(e) => {
            // Clear any pending Java exception
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            return Err(NativeError::Bridge(format!("{} failed: {}", method, e)));
        }
    };

    if reply.is_null() {
        return Err(NativeError::Bridge(format!("{} returned null", method)));
    }

    let reply: String = env
        .get_string((&reply).into())
        .map_err(|e| NativeError::Bridge(format!("String conversion failed: {}", e)))?
        .into();
    Ok(reply)
}

#[async_trait]
impl NativeCameraRoll for AndroidBridge {
    async fn save_to_camera_roll(
        &self,
        uri: &str,
        options: &NativeSaveOptions,
    ) -> Result<Asset, NativeError> {
        self.call(bridge::SAVE_TO_CAMERA_ROLL, encode_args(&(uri, options))?)
            .await
    }

    async fn get_photos(&self, params: &EnumerationRequest) -> Result<Page, NativeError> {
        self.call(bridge::GET_PHOTOS, encode_args(&(params,))?).await
    }

    async fn get_albums(&self, params: &AlbumQuery) -> Result<Vec<Album>, NativeError> {
        self.call(bridge::GET_ALBUMS, encode_args(&(params,))?).await
    }

    async fn delete_photos(&self, uris: &[String]) -> Result<(), NativeError> {
        self.call(bridge::DELETE_PHOTOS, encode_args(&(uris,))?).await
    }

    async fn get_photo_by_internal_id(
        &self,
        internal_id: &str,
        options: &ConversionOptions,
    ) -> Result<Asset, NativeError> {
        self.call(
            bridge::GET_PHOTO_BY_INTERNAL_ID,
            encode_args(&(internal_id, options))?,
        )
        .await
    }

    async fn get_photo_thumbnail(
        &self,
        internal_id: &str,
        options: &ThumbnailOptions,
    ) -> Result<Thumbnail, NativeError> {
        self.call(
            bridge::GET_PHOTO_THUMBNAIL,
            encode_args(&(internal_id, options))?,
        )
        .await
    }
}

#[async_trait]
impl NativePermissionModule for AndroidBridge {
    async fn check_permission(
        &self,
        level: AccessLevel,
    ) -> Result<AuthorizationStatus, NativeError> {
        self.call(bridge::CHECK_PERMISSION, encode_args(&(level,))?)
            .await
    }

    async fn request_read_write_permission(&self) -> Result<AuthorizationStatus, NativeError> {
        self.call(bridge::REQUEST_READ_WRITE_PERMISSION, "[]".to_string())
            .await
    }

    async fn request_add_only_permission(&self) -> Result<AuthorizationStatus, NativeError> {
        self.call(bridge::REQUEST_ADD_ONLY_PERMISSION, "[]".to_string())
            .await
    }

    async fn refresh_photo_selection(&self) -> Result<bool, NativeError> {
        self.call(bridge::REFRESH_PHOTO_SELECTION, "[]".to_string())
            .await
    }
}
